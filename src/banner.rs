use crate::version;
use console::style;

const TAGLINE: &str = "AI Agent for production-ready n8n workflows";
const INNER_WIDTH: usize = 59;

/// Boxed title shown before command output unless `--quiet` is set.
pub fn render() -> String {
    let border = "═".repeat(INNER_WIDTH);
    let title = format!("⚡ {} v{}", version::PKG_NAME, version::VERSION);

    format!(
        "\n{top}\n{title}\n{tagline}\n{bottom}\n",
        top = style(format!("╔{}╗", border)).cyan().bold(),
        title = boxed_line(&title, |s| style(s).white().bold().to_string()),
        tagline = boxed_line(TAGLINE, |s| style(s).dim().to_string()),
        bottom = style(format!("╚{}╝", border)).cyan().bold(),
    )
}

pub fn print() {
    println!("{}", render());
}

fn boxed_line(text: &str, paint: impl Fn(&str) -> String) -> String {
    let width = console::measure_text_width(text);
    let padding = INNER_WIDTH.saturating_sub(width + 3);
    let edge = style("║").cyan().bold();
    format!("{edge}  {}{} {edge}", paint(text), " ".repeat(padding))
}
