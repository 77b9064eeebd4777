//! Port ordering for module declarations and instance port maps.

use ipx_model::{MetaPort, PortDirection};

/// Returns the ports ordered by interface, then direction, then name.
///
/// Ports with an interface come first, by interface name; ports outside
/// any interface come last. Within an interface inputs precede inouts,
/// which precede outputs.
pub fn sort_ports(ports: &[MetaPort]) -> Vec<&MetaPort> {
    let mut sorted: Vec<&MetaPort> = ports.iter().collect();
    sorted.sort_by(|a, b| {
        a.interface
            .is_none()
            .cmp(&b.interface.is_none())
            .then_with(|| a.interface.cmp(&b.interface))
            .then_with(|| direction_rank(a.direction).cmp(&direction_rank(b.direction)))
            .then_with(|| a.name.cmp(&b.name))
    });
    sorted
}

fn direction_rank(direction: PortDirection) -> u8 {
    match direction {
        PortDirection::In => 0,
        PortDirection::InOut => 1,
        PortDirection::Out => 2,
    }
}

/// Comment text introducing a run of ports of the given interface.
pub(crate) fn interface_heading(interface: Option<&str>) -> String {
    match interface {
        Some(name) => format!("Interface: {name}"),
        None => "These ports are not in any interface".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port(name: &str, direction: PortDirection, interface: Option<&str>) -> MetaPort {
        let mut port = MetaPort::new(name, direction);
        port.interface = interface.map(str::to_string);
        port
    }

    #[test]
    fn interface_then_direction_then_name() {
        let ports = vec![
            port("z_loose", PortDirection::In, None),
            port("b_out", PortDirection::Out, Some("bus")),
            port("a_in", PortDirection::In, Some("bus")),
            port("clk", PortDirection::In, Some("clock")),
            port("a_out", PortDirection::Out, Some("bus")),
            port("pad", PortDirection::InOut, Some("bus")),
        ];
        let names: Vec<&str> = sort_ports(&ports).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["a_in", "pad", "a_out", "b_out", "clk", "z_loose"]);
    }

    #[test]
    fn headings() {
        assert_eq!(interface_heading(Some("bus")), "Interface: bus");
        assert_eq!(
            interface_heading(None),
            "These ports are not in any interface"
        );
    }
}
