use clap::Parser;
use std::path::{Path, PathBuf};

/// Show the NuGet dependency hierarchy of restored .NET projects
#[derive(Parser, Debug)]
#[command(name = "dependency-hierarchy")]
#[command(version)]
#[command(
    about = "Show the NuGet dependency hierarchy of restored .NET projects",
    long_about = "Reads obj/project.assets.json of each project and prints its dependency tree. \
                  Lines whose requested version differs from the restored one are marked \
                  'omitted for conflict with <version>'."
)]
pub struct Args {
    /// Project directories or .csproj files (defaults to current directory)
    #[arg(value_name = "PROJECT", default_value = ".")]
    pub projects: Vec<PathBuf>,

    /// Only show the dependency chains leading to this package
    #[arg(short, long, value_name = "PACKAGE")]
    pub filter: Option<String>,

    /// Only list the projects that depend on this package
    #[arg(long, value_name = "PACKAGE")]
    pub depends_on: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to ./dependency-hierarchy.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress messages and warnings
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Project directories in argument order, with `.csproj` files reduced to
    /// their directory
    pub fn project_dirs(&self) -> Vec<PathBuf> {
        self.projects.iter().map(|p| project_dir(p)).collect()
    }
}

/// Maps `path/to/App.csproj` to `path/to`; any other path is kept as given
pub fn project_dir(path: &Path) -> PathBuf {
    let is_project_file = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csproj"));
    if !is_project_file {
        return path.to_path_buf();
    }

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("dependency-hierarchy").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.projects, vec![PathBuf::from(".")]);
        assert!(args.filter.is_none());
        assert!(args.depends_on.is_none());
        assert!(!args.no_color);
        assert!(!args.quiet);
        assert!(args.output.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_all_options() {
        let args = parse(&[
            "src/App",
            "src/Lib/Lib.csproj",
            "-f",
            "PackageB",
            "--depends-on",
            "PackageC",
            "--no-color",
            "-o",
            "tree.txt",
            "-c",
            "custom.yml",
            "-q",
        ]);
        assert_eq!(args.projects.len(), 2);
        assert_eq!(args.filter.as_deref(), Some("PackageB"));
        assert_eq!(args.depends_on.as_deref(), Some("PackageC"));
        assert!(args.no_color);
        assert!(args.quiet);
        assert_eq!(args.output, Some(PathBuf::from("tree.txt")));
        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
        assert_eq!(
            args.project_dirs(),
            vec![PathBuf::from("src/App"), PathBuf::from("src/Lib")]
        );
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let result = Args::try_parse_from(["dependency-hierarchy", "--format", "json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_filter_requires_value() {
        let result = Args::try_parse_from(["dependency-hierarchy", "--filter"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_project_dir_csproj() {
        assert_eq!(
            project_dir(Path::new("src/App/App.csproj")),
            PathBuf::from("src/App")
        );
        assert_eq!(
            project_dir(Path::new("src/App/App.CSPROJ")),
            PathBuf::from("src/App")
        );
        assert_eq!(project_dir(Path::new("App.csproj")), PathBuf::from("."));
    }

    #[test]
    fn test_project_dir_directory_unchanged() {
        assert_eq!(project_dir(Path::new("src/App")), PathBuf::from("src/App"));
        assert_eq!(
            project_dir(Path::new("src/App.sln")),
            PathBuf::from("src/App.sln")
        );
    }
}
