//! CLI module for folio
//!
//! Command-line administration of the portfolio backend. Uses clap for
//! argument parsing and owo-colors for colored terminal output; every
//! command drives the same page controllers and forms as the web front end.

pub mod commands;
pub mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// folio - portfolio admin client
#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "folio - manage portfolio projects, manuals and steps",
    after_help = "EXAMPLES:\n    \
                  folio login                         # Store a token for later commands\n    \
                  folio projects                      # List projects and their stacks\n    \
                  folio project show 3                # Project detail with the active manual\n    \
                  folio manual activate 3 7           # Make manual 7 the active one\n    \
                  folio step add 3 \"Run it\" --image shot.png"
)]
pub struct Cli {
    /// Path to the configuration file (defaults to ./folio.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all projects
    Projects,

    /// Show or change a single project
    #[command(subcommand)]
    Project(ProjectCommands),

    /// Manage the manuals of a project
    #[command(subcommand)]
    Manual(ManualCommands),

    /// Manage the steps of a project's active manual
    #[command(subcommand)]
    Step(StepCommands),

    /// Technology catalog
    #[command(subcommand)]
    Tech(TechCommands),

    /// List technology categories
    Categories,

    /// Log in and store the token
    Login {
        #[arg(short, long)]
        email: Option<String>,

        /// Read from FOLIO_PASSWORD when omitted, then prompt
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Forget the stored token
    Logout,

    /// Show the logged-in user
    Whoami,
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Project detail: stack, active manual and its steps
    Show { id: String },

    /// Create a project
    Create(ProjectArgs),

    /// Edit a project; omitted fields keep their value
    Edit {
        id: String,

        #[command(flatten)]
        fields: ProjectArgs,
    },

    /// Delete a project
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct ProjectArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub client_repo: Option<String>,

    #[arg(long)]
    pub client_url: Option<String>,

    #[arg(long)]
    pub server_repo: Option<String>,

    #[arg(long)]
    pub server_url: Option<String>,

    /// Local image to upload as the project picture
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Technology ids; replaces the current selection
    #[arg(long = "tech", value_delimiter = ',')]
    pub technologies: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum ManualCommands {
    /// Create a manual
    Create {
        project: String,

        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "1.0")]
        version: String,
    },

    /// Edit a manual; omitted fields keep their value
    Edit {
        project: String,
        manual: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        version: Option<String>,
    },

    /// Delete a manual
    Delete {
        project: String,
        manual: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Make a manual the project's only active manual
    Activate { project: String, manual: String },
}

#[derive(Subcommand, Debug)]
pub enum StepCommands {
    /// Append a step to the active manual
    Add {
        project: String,
        description: String,

        /// Local image to upload
        #[arg(long, conflicts_with = "image_url")]
        image: Option<PathBuf>,

        /// Already hosted image
        #[arg(long)]
        image_url: Option<String>,
    },

    /// Edit a step of the active manual
    Edit {
        project: String,
        step: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long, conflicts_with = "image_url")]
        image: Option<PathBuf>,

        #[arg(long)]
        image_url: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TechCommands {
    /// List the catalog
    List,

    /// Add a technology to the catalog
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        logo_url: String,

        #[arg(long)]
        site_url: String,

        /// Category id (defaults to the first category)
        #[arg(long)]
        category: Option<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Commands {
    /// Commands that change backend data and are refused without a login.
    pub fn requires_login(&self) -> bool {
        match self {
            Commands::Project(cmd) => !matches!(cmd, ProjectCommands::Show { .. }),
            Commands::Manual(_) | Commands::Step(_) => true,
            Commands::Tech(cmd) => matches!(cmd, TechCommands::Add { .. }),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_project_create() {
        let cli = Cli::try_parse_from([
            "folio",
            "project",
            "create",
            "--name",
            "Folio",
            "--tech",
            "1,2",
        ])
        .unwrap();
        match cli.command {
            Commands::Project(ProjectCommands::Create(args)) => {
                assert_eq!(args.name.as_deref(), Some("Folio"));
                assert_eq!(args.technologies, vec!["1", "2"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "projects", "--no-color", "-v"]).unwrap();
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_admin_commands_require_login() {
        let parse = |args: &[&str]| Cli::try_parse_from(args).unwrap().command;
        assert!(!parse(&["folio", "projects"]).requires_login());
        assert!(!parse(&["folio", "project", "show", "3"]).requires_login());
        assert!(!parse(&["folio", "tech", "list"]).requires_login());
        assert!(parse(&["folio", "project", "delete", "3"]).requires_login());
        assert!(parse(&["folio", "manual", "activate", "3", "7"]).requires_login());
    }

    #[test]
    fn test_step_image_flags_conflict() {
        let result = Cli::try_parse_from([
            "folio",
            "step",
            "add",
            "3",
            "Run it",
            "--image",
            "shot.png",
            "--image-url",
            "https://res.cloudinary.com/x.png",
        ]);
        assert!(result.is_err());
    }
}
