use clap::{Parser, Subcommand};

/// Track component prices and stock across Mouser and JLCPCB
#[derive(Parser, Debug)]
#[command(name = "bomsource")]
#[command(version)]
#[command(about = "Track component prices and stock across Mouser and JLCPCB", long_about = None)]
pub struct Args {
    /// Path to the project file
    #[arg(short, long, default_value = "bom.json")]
    pub project: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project file
    Init {
        /// Project name
        #[arg(short, long)]
        name: String,
    },

    /// Add a component to the project
    Add {
        /// Mouser part number
        #[arg(short, long)]
        mouser: Option<String>,

        /// JLCPCB part code (e.g. C7950)
        #[arg(short, long)]
        jlcpcb: Option<String>,

        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Category label
        #[arg(short, long, default_value = "Other")]
        category: String,

        /// Required total quantity
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Backup part reference
        #[arg(short, long)]
        backup: Option<String>,
    },

    /// Remove a component by id (prefix is enough)
    Remove {
        /// Component id or unique id prefix
        id: String,
    },

    /// List project components with their last-known vendor data
    List,

    /// Fetch fresh stock and prices from both vendors
    Refresh,

    /// Print per-vendor and hybrid totals from the cached vendor data
    Totals,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_project_path() {
        let args = Args::parse_from(["bomsource", "list"]);
        assert_eq!(args.project, "bom.json");
        assert!(matches!(args.command, Command::List));
    }

    #[test]
    fn test_init_requires_name() {
        assert!(Args::try_parse_from(["bomsource", "init"]).is_err());
        let args = Args::parse_from(["bomsource", "init", "--name", "Controller"]);
        match args.command {
            Command::Init { name } => assert_eq!(name, "Controller"),
            _ => panic!("expected init command"),
        }
    }

    #[test]
    fn test_add_defaults() {
        let args = Args::parse_from(["bomsource", "add", "--mouser", "595-LM358ADR"]);
        match args.command {
            Command::Add {
                mouser,
                jlcpcb,
                category,
                quantity,
                ..
            } => {
                assert_eq!(mouser.as_deref(), Some("595-LM358ADR"));
                assert!(jlcpcb.is_none());
                assert_eq!(category, "Other");
                assert_eq!(quantity, 1);
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_project_path_override() {
        let args = Args::parse_from(["bomsource", "-p", "boards/main.json", "totals"]);
        assert_eq!(args.project, "boards/main.json");
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(Args::try_parse_from(["bomsource", "export"]).is_err());
    }
}
