use console::{Term, style};
use std::path::Path;

use crate::types::Result;

pub struct Output {
    hyperlinks: bool,
}

impl Output {
    pub fn new() -> Self {
        Self {
            hyperlinks: Term::stdout().is_term(),
        }
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    pub fn header(&self, message: &str) {
        println!("\n{}", style(message).bold().underlined());
    }

    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold());
        println!("{}", "─".repeat(40));
    }

    /// `Label: path`, with the path clickable in terminals that support it
    pub fn path_line(&self, label: &str, path: &Path) {
        println!(
            "{}: {}",
            style(label).green(),
            file_link(path, self.hyperlinks)
        );
    }

    /// Ask a yes/no question on stderr. Without a terminal the default wins.
    pub fn confirm(&self, question: &str, default_yes: bool) -> Result<bool> {
        let term = Term::stderr();
        if !term.is_term() {
            return Ok(default_yes);
        }
        let choices = if default_yes { "[Y/n]" } else { "[y/N]" };
        term.write_str(&format!("{} {} ", question, style(choices).dim()))?;
        let answer = term.read_line()?;
        Ok(parse_answer(&answer, default_yes))
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_answer(answer: &str, default_yes: bool) -> bool {
    match answer.trim().to_lowercase().as_str() {
        "" => default_yes,
        "y" | "yes" => true,
        _ => false,
    }
}

/// OSC 8 hyperlink to a local path, or the plain path
pub fn file_link(path: &Path, enabled: bool) -> String {
    let shown = path.display().to_string();
    if !enabled {
        return shown;
    }
    let target = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut url = target.to_string_lossy().replace('\\', "/");
    if !url.starts_with('/') {
        url.insert(0, '/');
    }
    format!("\x1b]8;;file://{}\x1b\\{}\x1b]8;;\x1b\\", url, shown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer() {
        assert!(parse_answer("", true));
        assert!(!parse_answer("", false));
        assert!(parse_answer("Y", false));
        assert!(parse_answer(" yes ", false));
        assert!(!parse_answer("n", true));
        assert!(!parse_answer("maybe", true));
    }

    #[test]
    fn test_file_link() {
        assert_eq!(file_link(Path::new("/videos/raw"), false), "/videos/raw");

        let link = file_link(Path::new("/videos/raw"), true);
        assert!(link.starts_with("\x1b]8;;file:///"));
        assert!(link.contains("\x1b\\/videos/raw\x1b]8;;"));
    }
}
