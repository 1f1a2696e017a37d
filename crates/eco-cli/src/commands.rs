use anyhow::Context;
use chrono::Utc;
use colored::Colorize;
use serde::Serialize;

use eco_server::{EcoServer, ServerConfig};
use eco_store::{ContentReader, ContentWriter, InMemoryContentStore, OrphanPolicy, StoreConfig};
use eco_types::{
    relative_label, validate_comment_body, CommentView, NewPost, PostId, PostView, User, UserId,
};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let store = build_store(cli.allow_orphans);
    let format = cli.format;
    match cli.command {
        Command::Feed(args) => cmd_feed(&store, &format, args),
        Command::Show(args) => cmd_show(&store, &format, args),
        Command::Post(args) => cmd_post(&store, &format, args),
        Command::Comment(args) => cmd_comment(&store, &format, args),
        Command::Users => cmd_users(&store, &format),
        Command::Leaderboard(args) => cmd_leaderboard(&store, &format, args),
        Command::Serve(args) => cmd_serve(args, cli.allow_orphans),
    }
}

fn build_store(allow_orphans: bool) -> InMemoryContentStore {
    InMemoryContentStore::new(StoreConfig::default().with_orphan_comments(orphan_policy(allow_orphans)))
}

fn orphan_policy(allow_orphans: bool) -> OrphanPolicy {
    if allow_orphans {
        OrphanPolicy::Allow
    } else {
        OrphanPolicy::Reject
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_feed(store: &InMemoryContentStore, format: &OutputFormat, args: FeedArgs) -> anyhow::Result<()> {
    let mut feed = store.feed()?;
    if let Some(limit) = args.limit {
        feed.truncate(limit);
    }
    match format {
        OutputFormat::Json => print_json(&feed),
        OutputFormat::Text => {
            if feed.is_empty() {
                println!("No posts yet.");
            }
            for post in &feed {
                print_post(post, false);
            }
            Ok(())
        }
    }
}

fn cmd_show(store: &InMemoryContentStore, format: &OutputFormat, args: ShowArgs) -> anyhow::Result<()> {
    let Some(post) = store.post_by_id(&PostId::new(args.id.clone()))? else {
        anyhow::bail!("post {} not found", args.id);
    };
    match format {
        OutputFormat::Json => print_json(&post),
        OutputFormat::Text => {
            print_post(&post, true);
            Ok(())
        }
    }
}

fn cmd_post(store: &InMemoryContentStore, format: &OutputFormat, args: PostArgs) -> anyhow::Result<()> {
    let draft = NewPost::new(args.user, args.title, args.content)
        .with_kind(args.kind)
        .with_image_url(args.image_url);
    draft.validate().context("please fill in title and content")?;

    let post = store.create_post(draft)?;
    let feed = store.feed()?;
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({ "created": post, "feed": feed })),
        OutputFormat::Text => {
            println!("{} Post {} created", "✓".green().bold(), post.id.to_string().yellow());
            println!();
            for post in &feed {
                print_post(post, false);
            }
            Ok(())
        }
    }
}

fn cmd_comment(store: &InMemoryContentStore, format: &OutputFormat, args: CommentArgs) -> anyhow::Result<()> {
    validate_comment_body(&args.body)?;
    let post_id = PostId::new(args.post_id);
    let comment = store.create_comment(&post_id, &UserId::new(args.user), &args.body)?;
    let post = store.post_by_id(&post_id)?;
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({ "created": comment, "post": post })),
        OutputFormat::Text => {
            println!("{} Comment {} added", "✓".green().bold(), comment.comment.id.to_string().yellow());
            match post {
                Some(post) => {
                    println!();
                    print_post(&post, true);
                }
                None => println!("  {}", format!("post {post_id} does not exist; comment stored as orphan").dimmed()),
            }
            Ok(())
        }
    }
}

fn cmd_users(store: &InMemoryContentStore, format: &OutputFormat) -> anyhow::Result<()> {
    let users = store.users()?;
    match format {
        OutputFormat::Json => print_json(&users),
        OutputFormat::Text => {
            for user in &users {
                print_user(user);
            }
            Ok(())
        }
    }
}

fn cmd_leaderboard(store: &InMemoryContentStore, format: &OutputFormat, args: LeaderboardArgs) -> anyhow::Result<()> {
    let top = store.leaderboard(args.limit)?;
    match format {
        OutputFormat::Json => print_json(&top),
        OutputFormat::Text => {
            for (rank, user) in top.iter().enumerate() {
                println!(
                    "{:>2}. {:<20} {} eco points",
                    rank + 1,
                    user.username.bold(),
                    user.eco_score.to_string().green()
                );
            }
            Ok(())
        }
    }
}

fn cmd_serve(args: ServeArgs, allow_orphans: bool) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path).with_context(|| format!("loading {path}"))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.bind_addr = bind.parse().with_context(|| format!("invalid bind address {bind}"))?;
    }
    if allow_orphans {
        config.store.orphan_comments = OrphanPolicy::Allow;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(EcoServer::new(config).serve())?;
    Ok(())
}

fn print_post(view: &PostView, with_comments: bool) {
    let now = Utc::now();
    let post = &view.post;
    println!(
        "{} {}  {}",
        format!("#{}", post.id).yellow().bold(),
        post.title.bold(),
        format!("[{}]", post.kind).cyan()
    );
    println!(
        "   by {} · {} · {} likes · {} comments",
        view.author_name().green(),
        relative_label(post.created_at, now).dimmed(),
        post.likes,
        post.comments_count
    );
    if let Some(url) = &post.image_url {
        println!("   {}", url.blue());
    }
    if with_comments {
        println!("   {}", post.content);
        for comment in &view.comments {
            print_comment(comment);
        }
    }
    println!();
}

fn print_comment(view: &CommentView) {
    println!(
        "     {} {}: {}",
        "↳".dimmed(),
        view.author_name().green(),
        view.comment.content
    );
}

fn print_user(user: &User) {
    println!(
        "{} {:<20} {:<18} {}",
        format!("#{}", user.id).yellow(),
        user.username.bold(),
        user.location,
        user.eco_score.to_string().green()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orphan_flag_selects_policy() {
        assert_eq!(orphan_policy(true), OrphanPolicy::Allow);
        assert_eq!(orphan_policy(false), OrphanPolicy::Reject);
    }

    #[test]
    fn post_command_rejects_blank_title() {
        let store = build_store(false);
        let args = PostArgs {
            title: " ".into(),
            content: "B".into(),
            kind: "article".into(),
            image_url: None,
            user: "1".into(),
        };
        assert!(cmd_post(&store, &OutputFormat::Json, args).is_err());
        assert_eq!(store.post_count().unwrap(), 5);
    }

    #[test]
    fn post_command_creates_post() {
        let store = build_store(false);
        let args = PostArgs {
            title: "T".into(),
            content: "B".into(),
            kind: "photo".into(),
            image_url: Some(String::new()),
            user: "2".into(),
        };
        cmd_post(&store, &OutputFormat::Json, args).unwrap();
        let head = &store.feed().unwrap()[0];
        assert_eq!(head.post.title, "T");
        assert!(head.post.image_url.is_none());
    }

    #[test]
    fn comment_command_respects_orphan_policy() {
        let args = || CommentArgs {
            post_id: "missing".into(),
            body: "x".into(),
            user: "1".into(),
        };
        let strict = build_store(false);
        assert!(cmd_comment(&strict, &OutputFormat::Json, args()).is_err());

        let lenient = build_store(true);
        cmd_comment(&lenient, &OutputFormat::Text, args()).unwrap();
        assert_eq!(lenient.comment_count().unwrap(), 6);
    }

    #[test]
    fn show_unknown_post_fails() {
        let store = build_store(false);
        let args = ShowArgs { id: "404".into() };
        assert!(cmd_show(&store, &OutputFormat::Text, args).is_err());
    }
}
