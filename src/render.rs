//! Card Rendering
//!
//! Pure string templates for the content grid. Output is assigned to the
//! content container's `innerHTML`, so every API-sourced string is escaped
//! after truncation.

use std::borrow::Cow;

use crate::models::{ItemCollection, Post, Todo, User};

pub const POST_TITLE_LIMIT: usize = 40;
pub const POST_BODY_LIMIT: usize = 150;
pub const TODO_TITLE_LIMIT: usize = 50;

/// Appended to text cut at its limit
pub const ELLIPSIS: &str = "...";

/// Keep the first `limit` characters of `text`, adding [`ELLIPSIS`] if anything was cut
pub fn truncate(text: &str, limit: usize) -> Cow<'_, str> {
    match text.char_indices().nth(limit) {
        None => Cow::Borrowed(text),
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], ELLIPSIS)),
    }
}

/// Escape text for use inside element content or a quoted attribute
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn display(text: &str, limit: usize) -> String {
    escape_html(&truncate(text, limit)).into_owned()
}

/// Render whichever tab the collection belongs to
pub fn render_collection(items: &ItemCollection) -> String {
    match items {
        ItemCollection::Posts(posts) => render_posts(posts),
        ItemCollection::Users(users) => render_users(users),
        ItemCollection::Todos(todos) => render_todos(todos),
    }
}

pub fn render_posts(posts: &[Post]) -> String {
    posts.iter().map(post_card).collect()
}

pub fn render_users(users: &[User]) -> String {
    users.iter().map(user_card).collect()
}

pub fn render_todos(todos: &[Todo]) -> String {
    todos.iter().map(todo_card).collect()
}

fn post_card(post: &Post) -> String {
    format!(
        r#"<div class="card post-card"><h3>📝 {title}</h3><p>{body}</p><div class="user-info"><span>👤 User ID: {user_id}</span><span>🆔 Post ID: {id}</span></div></div>"#,
        title = display(&post.title, POST_TITLE_LIMIT),
        body = display(&post.body, POST_BODY_LIMIT),
        user_id = post.user_id,
        id = post.id,
    )
}

fn user_card(user: &User) -> String {
    format!(
        r#"<div class="card user-card"><h3>👤 {name}</h3><p><strong>@{username}</strong></p><p>📧 {email}</p><div class="user-info"><span>📱 {phone}</span><span>🌍 {city}</span></div></div>"#,
        name = escape_html(&user.name),
        username = escape_html(&user.username),
        email = escape_html(&user.email),
        phone = escape_html(&user.phone),
        city = escape_html(&user.address.city),
    )
}

fn todo_card(todo: &Todo) -> String {
    let (icon, status_class, status) = if todo.completed {
        ("✅", "completed", "Completed")
    } else {
        ("⏳", "pending", "Pending")
    };
    format!(
        r#"<div class="card todo-card"><h3>{icon} {title}</h3><div class="user-info"><span>👤 User ID: {user_id}</span><span class="status {status_class}">{status}</span></div></div>"#,
        title = display(&todo.title, TODO_TITLE_LIMIT),
        user_id = todo.user_id,
    )
}

/// Error panel with a retry control, handled by the content grid's click delegate
pub fn error_panel(message: &str) -> String {
    format!(
        r#"<div class="error-panel"><h2>❌ Error loading data</h2><p>{message}</p><button class="refresh-btn" data-action="retry">Try Again</button></div>"#,
        message = escape_html(message),
    )
}
