//! Command line definition

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use matjip_core::{BadgeCategory, Snowflake};

/// Badge engine maintenance tool
#[derive(Parser, Debug)]
#[command(name = "matjip-admin", author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply pending database migrations
    Migrate {
        #[arg(long, env = "MIGRATIONS_DIR", default_value = "migrations")]
        dir: PathBuf,
    },

    /// Insert or refresh the badge catalog
    Seed,

    /// List catalog badges
    Catalog {
        /// Only this category (ACTIVITY, REPUTATION, COLLECTION, MASTERY, SPECIAL)
        #[arg(long, value_parser = parse_category)]
        category: Option<BadgeCategory>,
    },

    /// Award the ranking badge to the creators of the most subscribed tags
    RankTags,

    /// Award one catalog badge to a user
    Award {
        #[arg(long, value_parser = parse_snowflake)]
        user: Snowflake,
        #[arg(long)]
        badge: String,
    },

    /// Re-run every ladder for a user from current counters
    Reevaluate {
        #[arg(long, value_parser = parse_snowflake)]
        user: Snowflake,
    },

    /// Show a user's position on every ladder
    Progress {
        #[arg(long, value_parser = parse_snowflake)]
        user: Snowflake,
    },

    /// List the badges a user holds
    Badges {
        #[arg(long, value_parser = parse_snowflake)]
        user: Snowflake,
    },

    /// List a user's notifications, newest first
    Notifications {
        #[arg(long, value_parser = parse_snowflake)]
        user: Snowflake,
        /// Only notifications older than this id
        #[arg(long, value_parser = parse_snowflake)]
        before: Option<Snowflake>,
        #[arg(long)]
        limit: Option<i64>,
    },

    /// Delete all of a user's badges and zero their counters
    Reset {
        #[arg(long, value_parser = parse_snowflake)]
        user: Snowflake,
        /// Required; the reset cannot be undone
        #[arg(long)]
        yes: bool,
    },
}

fn parse_snowflake(s: &str) -> Result<Snowflake, String> {
    Snowflake::parse(s).map_err(|e| format!("{e}: {s}"))
}

fn parse_category(s: &str) -> Result<BadgeCategory, String> {
    s.to_ascii_uppercase().parse().map_err(|e| format!("{e}"))
}
