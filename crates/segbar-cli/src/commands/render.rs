use anyhow::{bail, Result};

use segbar_core::AppConfig;
use segbar_tui::{
    snapshot::{buffer_lines, render_settled},
    SegmentedControl,
};

pub async fn run(
    config: &AppConfig,
    width: u16,
    index: Option<usize>,
    rtl: Option<bool>,
    margin: Option<u16>,
) -> Result<()> {
    for line in render_lines(config, width, index, rtl, margin)? {
        println!("{}", line);
    }
    Ok(())
}

fn render_lines(
    config: &AppConfig,
    width: u16,
    index: Option<usize>,
    rtl: Option<bool>,
    margin: Option<u16>,
) -> Result<Vec<String>> {
    let control = &config.control;
    let index = index.unwrap_or(control.initial_index);
    if index >= control.segments.len() {
        bail!(
            "Segment {} does not exist ({} segments)",
            index,
            control.segments.len()
        );
    }

    let widget = SegmentedControl::new(control.segments.iter().cloned(), index, |_| {})
        .badge_values(control.badge_values.iter().cloned())
        .rtl(rtl.unwrap_or(control.is_rtl))
        .container_margin(margin.unwrap_or(control.container_margin));

    let buf = render_settled(&widget, width, 1);
    Ok(buffer_lines(&buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_config() {
        let config = AppConfig::default();
        let lines = render_lines(&config, 44, Some(1), None, Some(2)).unwrap();
        assert_eq!(lines, vec!["     Day       Week     Month      Year"]);
    }

    #[test]
    fn test_render_rtl() {
        let config = AppConfig::default();
        let lines = render_lines(&config, 40, Some(0), Some(true), Some(0)).unwrap();
        assert_eq!(lines, vec!["   Year     Month      Week      Day"]);
    }

    #[test]
    fn test_render_ltr_overrides_config() {
        let mut config = AppConfig::default();
        config.control.is_rtl = true;

        let lines = render_lines(&config, 40, Some(0), None, Some(0)).unwrap();
        assert_eq!(lines, vec!["   Year     Month      Week      Day"]);

        let lines = render_lines(&config, 40, Some(0), Some(false), Some(0)).unwrap();
        assert_eq!(lines, vec!["   Day       Week     Month      Year"]);
    }

    #[test]
    fn test_render_rejects_bad_index() {
        let config = AppConfig::default();
        assert!(render_lines(&config, 40, Some(4), None, None).is_err());
    }
}
