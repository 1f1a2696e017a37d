//! Sample rows loaded into a freshly built store.
//!
//! Seeded `comments_count` values are carried as-is; they reflect the
//! sample feed's advertised totals, not the handful of seeded comment rows.

use chrono::{DateTime, Utc};

use eco_types::{Comment, CommentId, Post, PostId, PostKind, User, UserId};

fn ts(rfc3339: &str) -> DateTime<Utc> {
    rfc3339.parse().expect("seed timestamps are valid RFC 3339")
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    username: &str,
    email: &str,
    avatar_url: &str,
    bio: &str,
    eco_score: i64,
    location: &str,
    created_at: &str,
) -> User {
    User {
        id: UserId::from(id),
        username: username.into(),
        email: email.into(),
        avatar_url: avatar_url.into(),
        bio: bio.into(),
        eco_score,
        location: location.into(),
        created_at: ts(created_at),
    }
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    user_id: &str,
    title: &str,
    content: &str,
    image_url: &str,
    kind: PostKind,
    likes: u32,
    comments_count: u32,
    created_at: &str,
) -> Post {
    Post {
        id: PostId::from(id),
        user_id: UserId::from(user_id),
        title: title.into(),
        content: content.into(),
        kind,
        image_url: Some(image_url.into()),
        likes,
        comments_count,
        created_at: ts(created_at),
    }
}

fn comment(id: &str, post_id: &str, user_id: &str, content: &str, created_at: &str) -> Comment {
    Comment {
        id: CommentId::from(id),
        post_id: PostId::from(post_id),
        user_id: UserId::from(user_id),
        content: content.into(),
        created_at: ts(created_at),
    }
}

/// The five sample community members.
pub fn users() -> Vec<User> {
    vec![
        user(
            "1",
            "ecowarrior123",
            "eco@example.com",
            "https://images.unsplash.com/photo-1494790108755-2616b612b070?w=100&h=100&fit=crop&crop=face",
            "Passionate about sustainable living and renewable energy!",
            892,
            "San Francisco, CA",
            "2024-01-15T10:00:00Z",
        ),
        user(
            "2",
            "greenthumb_sara",
            "sara@example.com",
            "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=100&h=100&fit=crop&crop=face",
            "Urban gardener and zero-waste advocate 🌱",
            745,
            "Portland, OR",
            "2024-02-20T14:30:00Z",
        ),
        user(
            "3",
            "mike_sustainable",
            "mike@example.com",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face",
            "Electric vehicle enthusiast and climate activist",
            623,
            "Austin, TX",
            "2024-03-10T09:15:00Z",
        ),
        user(
            "4",
            "nature_lover_emma",
            "emma@example.com",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop&crop=face",
            "Hiking, recycling, and spreading eco-awareness everywhere I go!",
            567,
            "Denver, CO",
            "2024-01-28T16:45:00Z",
        ),
        user(
            "5",
            "solar_power_sam",
            "sam@example.com",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face",
            "Solar energy installer helping homes go green ☀️",
            934,
            "Phoenix, AZ",
            "2024-02-14T11:20:00Z",
        ),
    ]
}

/// The five sample posts, newest first.
pub fn posts() -> Vec<Post> {
    vec![
        post(
            "1",
            "1",
            "My First Month of Zero Waste Living",
            "I've been trying to live zero waste for a month now, and the results have been amazing! I've reduced my trash output by 80% and discovered so many creative ways to reuse items. The biggest challenge was food packaging, but I found some great local bulk stores. Here are my top 5 tips for getting started...",
            "https://images.unsplash.com/photo-1532996122724-e3c354a0b15b?w=600&h=400&fit=crop",
            PostKind::Article,
            45,
            12,
            "2024-07-17T10:30:00Z",
        ),
        post(
            "2",
            "2",
            "Urban Garden Update",
            "Look at my rooftop garden progress! 🌱 These tomatoes and herbs are thriving despite the city environment. Growing your own food reduces carbon footprint and tastes so much better. Anyone else trying urban gardening?",
            "https://images.unsplash.com/photo-1416879595882-3373a0480b5b?w=600&h=400&fit=crop",
            PostKind::Photo,
            78,
            8,
            "2024-07-16T15:20:00Z",
        ),
        post(
            "3",
            "3",
            "Electric Vehicle Road Trip Success!",
            "Just completed a 500-mile road trip in my Tesla Model 3! The charging infrastructure has improved so much. We saved approximately 150kg of CO2 compared to a gas car, and the total 'fuel' cost was only $25. The future of transportation is electric! ⚡",
            "https://images.unsplash.com/photo-1593941707882-a5bac6861d75?w=600&h=400&fit=crop",
            PostKind::Photo,
            92,
            15,
            "2024-07-15T08:45:00Z",
        ),
        post(
            "4",
            "4",
            "Beach Cleanup Results",
            "Our community beach cleanup this weekend was incredible! 25 volunteers collected over 200 pounds of trash and recyclables. Found everything from plastic bottles to old fishing nets. It's heartbreaking to see the impact on marine life, but together we can make a difference. Next cleanup is scheduled for August 15th!",
            "https://images.unsplash.com/photo-1618477388954-7852f32655ec?w=600&h=400&fit=crop",
            PostKind::Article,
            134,
            23,
            "2024-07-14T12:10:00Z",
        ),
        post(
            "5",
            "5",
            "Solar Panel Installation Complete!",
            "Finally got my home solar system installed! 20 panels generating 8kW should cover 95% of our electricity needs. The installation process took 2 days and we're already seeing the energy production. Estimated CO2 reduction: 4 tons per year. Best investment ever! ☀️",
            "https://images.unsplash.com/photo-1569163139394-de44cb5d2c6c?w=600&h=400&fit=crop",
            PostKind::Photo,
            156,
            31,
            "2024-07-13T14:55:00Z",
        ),
    ]
}

/// The five sample comments, oldest first.
pub fn comments() -> Vec<Comment> {
    vec![
        comment(
            "1",
            "1",
            "2",
            "This is so inspiring! I've been wanting to start zero waste. Do you have any specific bulk store recommendations?",
            "2024-07-17T11:15:00Z",
        ),
        comment(
            "2",
            "1",
            "3",
            "Great tips! The food packaging challenge is real. I started bringing my own containers to delis and it works great.",
            "2024-07-17T12:30:00Z",
        ),
        comment(
            "3",
            "2",
            "1",
            "Your garden looks amazing! I'm trying container gardening on my balcony. Any advice for small spaces?",
            "2024-07-16T16:45:00Z",
        ),
        comment(
            "4",
            "3",
            "4",
            "That's awesome! How was the charging experience on the road trip? Any range anxiety?",
            "2024-07-15T09:20:00Z",
        ),
        comment(
            "5",
            "4",
            "5",
            "Thank you for organizing this! I was there and it felt great to make a tangible difference. Count me in for August!",
            "2024-07-14T13:25:00Z",
        ),
    ]
}
