//! Host property lookup from `hostnamectl`
//!
//! The JSON form (`hostnamectl --json=short`) is queried first. Older
//! systemd versions lack it, so the human-readable listing is parsed as a
//! fallback through a [`FieldParser`].

use serde_json::Value;

/// Command that reports host properties
pub const SYSTEM_INFO_COMMAND: &str = "hostnamectl";

/// Arguments for the structured form
pub const SYSTEM_INFO_JSON_ARGS: &[&str] = &["--json=short"];

/// Display labels whose JSON keys differ from the label with spaces removed
const JSON_ALIASES: &[(&str, &[&str])] = &[
    ("operatingsystem", &["OperatingSystemPrettyName"]),
    ("kernel", &["KernelName", "KernelRelease"]),
    ("statichostname", &["StaticHostname"]),
    ("machineid", &["MachineID"]),
    ("bootid", &["BootID"]),
];

/// Pulls one labelled value out of free-form command output
pub trait FieldParser {
    fn parse(&self, output: &str, field: &str) -> Option<String>;
}

/// `Label: value` lines, as printed by `hostnamectl`
///
/// The first line containing `field:` wins; the value is whatever follows the
/// colon, trimmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelParser;

impl FieldParser for LabelParser {
    fn parse(&self, output: &str, field: &str) -> Option<String> {
        if field.is_empty() {
            return None;
        }

        let label = format!("{field}:");
        output.lines().find_map(|line| {
            line.find(&label)
                .map(|start| line[start + label.len()..].trim().to_string())
        })
    }
}

/// Look `field` up in `hostnamectl --json=short` output
///
/// Returns `None` when the output is not JSON or lacks the field, so the
/// caller can fall back to text parsing.
pub fn structured_field(json: &str, field: &str) -> Option<String> {
    let object = match serde_json::from_str::<Value>(json).ok()? {
        Value::Object(map) => map,
        _ => return None,
    };

    let wanted = normalize(field);
    if wanted.is_empty() {
        return None;
    }

    if let Some((_, keys)) = JSON_ALIASES.iter().find(|(label, _)| *label == wanted) {
        let parts: Vec<String> = keys
            .iter()
            .filter_map(|key| object.get(*key).and_then(scalar))
            .collect();
        if !parts.is_empty() {
            return Some(parts.join(" "));
        }
    }

    object
        .iter()
        .find(|(key, _)| key.to_lowercase() == wanted)
        .and_then(|(_, value)| scalar(value))
}

fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "\
 Static hostname: devbox
       Icon name: computer-vm
         Chassis: vm
Operating System: Ubuntu 22.04.3 LTS
          Kernel: Linux 6.5.0-14-generic
    Architecture: x86-64
  Hardware Model: Standard PC _Q35 + ICH9, 2009_";

    const JSON: &str = r#"{"Hostname":"devbox","StaticHostname":"devbox","IconName":"computer-vm","Chassis":"vm","KernelName":"Linux","KernelRelease":"6.5.0-14-generic","OperatingSystemPrettyName":"Ubuntu 22.04.3 LTS","HardwareModel":null,"FirmwareDate":1700000000}"#;

    #[test]
    fn label_parser_strips_prefix() {
        let parser = LabelParser;
        assert_eq!(
            parser.parse(TEXT, "Operating System").as_deref(),
            Some("Ubuntu 22.04.3 LTS")
        );
        assert_eq!(
            parser.parse(TEXT, "Kernel").as_deref(),
            Some("Linux 6.5.0-14-generic")
        );
        assert_eq!(
            parser.parse(TEXT, "Hardware Model").as_deref(),
            Some("Standard PC _Q35 + ICH9, 2009_")
        );
    }

    #[test]
    fn label_parser_missing_field() {
        assert_eq!(LabelParser.parse(TEXT, "Firmware Version"), None);
        assert_eq!(LabelParser.parse(TEXT, ""), None);
        // Present as text but not as a label
        assert_eq!(LabelParser.parse(TEXT, "Ubuntu"), None);
    }

    #[test]
    fn structured_aliases() {
        assert_eq!(
            structured_field(JSON, "Operating System").as_deref(),
            Some("Ubuntu 22.04.3 LTS")
        );
        assert_eq!(
            structured_field(JSON, "Kernel").as_deref(),
            Some("Linux 6.5.0-14-generic")
        );
    }

    #[test]
    fn structured_by_label() {
        assert_eq!(structured_field(JSON, "Icon name").as_deref(), Some("computer-vm"));
        assert_eq!(structured_field(JSON, "chassis").as_deref(), Some("vm"));
        assert_eq!(
            structured_field(JSON, "Firmware Date").as_deref(),
            Some("1700000000")
        );
    }

    #[test]
    fn structured_misses() {
        assert_eq!(structured_field(JSON, "Hardware Model"), None);
        assert_eq!(structured_field(JSON, "Architecture"), None);
        assert_eq!(structured_field(TEXT, "Kernel"), None);
        assert_eq!(structured_field("[1, 2]", "Kernel"), None);
        assert_eq!(structured_field(JSON, " "), None);
    }
}
