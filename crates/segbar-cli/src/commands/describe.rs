use anyhow::{bail, Result};

use segbar_core::{accessibility::describe_all, AccessibilityProps, AppConfig};

pub async fn run(config: &AppConfig, index: Option<usize>, json: bool) -> Result<()> {
    let descriptions = describe(config, index)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&descriptions)?);
        return Ok(());
    }

    println!("Segments ({}):\n", descriptions.len());
    for (i, props) in descriptions.iter().enumerate() {
        println!("{}", format_entry(i, props));
    }

    Ok(())
}

fn describe(config: &AppConfig, index: Option<usize>) -> Result<Vec<AccessibilityProps>> {
    let control = &config.control;
    let index = index.unwrap_or(control.initial_index);
    if index >= control.segments.len() {
        bail!(
            "Segment {} does not exist ({} segments)",
            index,
            control.segments.len()
        );
    }
    Ok(describe_all(&control.segments, index))
}

fn format_entry(index: usize, props: &AccessibilityProps) -> String {
    let selected = props.state.map(|s| s.selected).unwrap_or(false);
    let marker = if selected { "*" } else { " " };
    let label = props.label.as_deref().unwrap_or("(no label)");

    let mut out = format!("{} {}. {}", marker, index + 1, label);
    if let Some(role) = props.role {
        out.push_str(&format!("\n    Role: {}", role));
    }
    if let Some(hint) = &props.hint {
        out.push_str(&format!("\n    Hint: {}", hint));
    }
    if let Some(value) = &props.value {
        out.push_str(&format!("\n    Value: {}", value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_marks_selected() {
        let config = AppConfig::default();
        let descriptions = describe(&config, Some(2)).unwrap();
        assert_eq!(descriptions.len(), 4);

        let text = format_entry(2, &descriptions[2]);
        assert_eq!(text, "* 3. Month, option, 3 of 4\n    Role: button");

        let text = format_entry(0, &descriptions[0]);
        assert_eq!(
            text,
            "  1. Day, option, 1 of 4\n    Role: button\n    Hint: Changes the active option"
        );
    }

    #[test]
    fn test_describe_json() {
        let config = AppConfig::default();
        let descriptions = describe(&config, None).unwrap();
        let json = serde_json::to_value(&descriptions).unwrap();
        assert_eq!(json[0]["label"], "Day, option, 1 of 4");
        assert_eq!(json[0]["role"], "button");
        assert_eq!(json[0]["state"]["selected"], true);
        assert!(json[0].get("hint").is_none());
    }

    #[test]
    fn test_describe_rejects_bad_index() {
        let config = AppConfig::default();
        assert!(describe(&config, Some(10)).is_err());
    }
}
