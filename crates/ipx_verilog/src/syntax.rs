//! Locating the hand-written regions of a previously generated module.

use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;

/// Marker line separating generated text from the implementation.
pub const IMPLEMENTATION_TAG: &str = "// ** Do NOT modify anything above this line **";

/// Text kept across regeneration of a module.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct ImplementationRegions {
    /// Text between the implementation tag (or the module header) and `endmodule`.
    pub implementation: String,
    /// Text following `endmodule`.
    pub post_module: String,
}

/// Extracts the implementation and post-module text of `module_name` from `text`.
///
/// The implementation starts after the [`IMPLEMENTATION_TAG`] line when the
/// tag is present, otherwise after the `);` closing the module header. It runs
/// up to the first `endmodule` of the module. The post-module text is
/// everything after that `endmodule` and its line break.
pub fn find_implementation(text: &str, module_name: &str) -> Result<ImplementationRegions, String> {
    let declaration = module_pattern(module_name)?;
    let module = declaration
        .find(text)
        .ok_or_else(|| format!("no declaration of module {module_name} found"))?;

    let endmodule = Regex::new(r"\bendmodule\b").map_err(|e| e.to_string())?;
    let end = endmodule
        .find_at(text, module.end())
        .ok_or_else(|| format!("module {module_name} is not terminated by endmodule"))?;

    let body = &text[module.end()..end.start()];
    let implementation = match body.find(IMPLEMENTATION_TAG) {
        Some(tag) => skip_line(&body[tag + IMPLEMENTATION_TAG.len()..]),
        None => {
            let header_end = body
                .find(");")
                .ok_or_else(|| format!("header of module {module_name} is not terminated"))?;
            skip_newline(&body[header_end + 2..])
        }
    };

    Ok(ImplementationRegions {
        implementation: implementation.to_string(),
        post_module: skip_newline(&text[end.end()..]).to_string(),
    })
}

/// Reads the regions of `module_name` from the file at `path`.
///
/// A missing file yields empty regions; other I/O failures and malformed
/// content are returned as the error text.
pub fn read_implementation(path: &Path, module_name: &str) -> Result<ImplementationRegions, String> {
    match fs::read_to_string(path) {
        Ok(text) => find_implementation(&text, module_name),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(ImplementationRegions::default()),
        Err(e) => Err(e.to_string()),
    }
}

fn module_pattern(module_name: &str) -> Result<Regex, String> {
    Regex::new(&format!(r"(?m)^\s*module\s+{}\b", regex::escape(module_name)))
        .map_err(|e| e.to_string())
}

/// Drops the remainder of the current line, including its line break.
fn skip_line(text: &str) -> &str {
    match text.find('\n') {
        Some(i) => &text[i + 1..],
        None => "",
    }
}

fn skip_newline(text: &str) -> &str {
    text.strip_prefix("\r\n")
        .or_else(|| text.strip_prefix('\n'))
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERATED: &str = "\
// header
module uart #(
    parameter WIDTH = 8
) (
    input  clk
);

// ** Do NOT modify anything above this line **
    reg [7:0] data;
endmodule

// trailing notes
";

    #[test]
    fn regions_after_tag() {
        let regions = find_implementation(GENERATED, "uart").unwrap();
        assert_eq!(regions.implementation, "    reg [7:0] data;\n");
        assert_eq!(regions.post_module, "\n// trailing notes\n");
    }

    #[test]
    fn regions_without_tag() {
        let text = "module top ();\n    assign a = b;\nendmodule\n";
        let regions = find_implementation(text, "top").unwrap();
        assert_eq!(regions.implementation, "    assign a = b;\n");
        assert_eq!(regions.post_module, "");
    }

    #[test]
    fn name_must_match_whole_word() {
        let text = "module uart_lite ();\nendmodule\n";
        let err = find_implementation(text, "uart").unwrap_err();
        assert!(err.contains("no declaration of module uart"));
    }

    #[test]
    fn missing_endmodule() {
        let text = "module top ();\n    assign a = b;\n";
        let err = find_implementation(text, "top").unwrap_err();
        assert!(err.contains("endmodule"));
    }

    #[test]
    fn unterminated_header_without_tag() {
        let text = "module top (\n    input a\nendmodule\n";
        let err = find_implementation(text, "top").unwrap_err();
        assert!(err.contains("header"));
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let regions = read_implementation(&dir.path().join("top.v"), "top").unwrap();
        assert_eq!(regions, ImplementationRegions::default());
    }

    #[test]
    fn regex_metacharacters_in_name() {
        let text = "module a.b ();\nendmodule\n";
        assert!(find_implementation(text, "a+b").is_err());
        assert!(find_implementation(text, "a.b").is_ok());
    }
}
