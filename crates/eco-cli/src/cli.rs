use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "eco",
    about = "Eco community feed: browse and post to a seeded content store",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Store comments on unknown posts instead of rejecting them
    #[arg(long, global = true)]
    pub allow_orphans: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the community feed, newest first
    Feed(FeedArgs),
    /// Show a single post with its comments
    Show(ShowArgs),
    /// Create a post, then show the refreshed feed
    Post(PostArgs),
    /// Comment on a post, then show the refreshed post
    Comment(CommentArgs),
    /// List community members
    Users,
    /// Rank members by eco score
    Leaderboard(LeaderboardArgs),
    /// Start the HTTP server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct FeedArgs {
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Args)]
pub struct PostArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub content: String,
    #[arg(long = "type", default_value = "article")]
    pub kind: String,
    #[arg(long)]
    pub image_url: Option<String>,
    /// Acting user
    #[arg(long, default_value = "1")]
    pub user: String,
}

#[derive(Args)]
pub struct CommentArgs {
    pub post_id: String,
    #[arg(short, long)]
    pub body: String,
    /// Acting user
    #[arg(long, default_value = "1")]
    pub user: String,
}

#[derive(Args)]
pub struct LeaderboardArgs {
    #[arg(short = 'n', long, default_value = "10")]
    pub limit: usize,
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long)]
    pub bind: Option<String>,
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_feed() {
        let cli = Cli::try_parse_from(["eco", "feed"]).unwrap();
        if let Command::Feed(args) = cli.command {
            assert!(args.limit.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_show() {
        let cli = Cli::try_parse_from(["eco", "show", "3"]).unwrap();
        if let Command::Show(args) = cli.command {
            assert_eq!(args.id, "3");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_post_defaults() {
        let cli = Cli::try_parse_from(["eco", "post", "--title", "T", "--content", "B"]).unwrap();
        if let Command::Post(args) = cli.command {
            assert_eq!(args.title, "T");
            assert_eq!(args.kind, "article");
            assert_eq!(args.user, "1");
            assert!(args.image_url.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_post_with_type_and_image() {
        let cli = Cli::try_parse_from([
            "eco", "post", "--title", "T", "--content", "B", "--type", "photo",
            "--image-url", "https://x/p.png", "--user", "4",
        ])
        .unwrap();
        if let Command::Post(args) = cli.command {
            assert_eq!(args.kind, "photo");
            assert_eq!(args.image_url, Some("https://x/p.png".into()));
            assert_eq!(args.user, "4");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_comment() {
        let cli = Cli::try_parse_from(["eco", "comment", "1", "-b", "Nice!", "--user", "2"]).unwrap();
        if let Command::Comment(args) = cli.command {
            assert_eq!(args.post_id, "1");
            assert_eq!(args.body, "Nice!");
            assert_eq!(args.user, "2");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_leaderboard_limit() {
        let cli = Cli::try_parse_from(["eco", "leaderboard", "-n", "3"]).unwrap();
        if let Command::Leaderboard(args) = cli.command {
            assert_eq!(args.limit, 3);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_serve() {
        let cli = Cli::try_parse_from(["eco", "serve", "--bind", "0.0.0.0:8080"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind.as_deref(), Some("0.0.0.0:8080"));
            assert!(args.config.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from(["eco", "--verbose", "--allow-orphans", "--format", "json", "users"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.allow_orphans);
        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(matches!(cli.command, Command::Users));
    }
}
