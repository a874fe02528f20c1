use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "keyword-class-finder")]
#[command(about = "Find C# classes containing a keyword and render JSON, Markdown and HTML reports")]
#[command(override_usage = "keyword-class-finder <WORKSPACE> <KEYWORD> [--with-references] [--github=<URL>]")]
pub struct Cli {
    /// Workspace directory, or a solution/project file inside it
    #[arg(value_name = "WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Case-sensitive substring searched in each class's full source text
    #[arg(value_name = "KEYWORD")]
    pub keyword: Option<String>,

    /// List every other document that mentions a matched class's name
    #[arg(long)]
    pub with_references: bool,

    /// Base URL for source links, e.g. https://github.com/org/repo/blob/main/
    #[arg(long, value_name = "URL")]
    pub github: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_equals_form_of_github_flag() {
        let cli = Cli::parse_from([
            "keyword-class-finder",
            "ws",
            "Cache",
            "--with-references",
            "--github=https://example.com/x/blob/main/",
        ]);
        assert_eq!(cli.workspace, Some(PathBuf::from("ws")));
        assert_eq!(cli.keyword.as_deref(), Some("Cache"));
        assert!(cli.with_references);
        assert_eq!(
            cli.github.as_deref(),
            Some("https://example.com/x/blob/main/")
        );
    }

    #[test]
    fn positionals_are_optional_at_parse_time() {
        let cli = Cli::parse_from(["keyword-class-finder", "ws"]);
        assert!(cli.keyword.is_none());
        assert!(!cli.with_references);
    }
}
