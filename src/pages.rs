use crate::bookmarks::repo_types::Bookmark;
use crate::users::dto::PublicUser;

/// Escape a user-originated value before interpolating it into a page.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - linkshelf</title>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

pub fn register_page() -> String {
    layout(
        "Sign up",
        r#"<h1>Sign up</h1>
<form action="/users" method="post">
  <label>Email <input type="email" name="email"></label>
  <label>Password <input type="password" name="password"></label>
  <button type="submit">Sign up</button>
</form>
<p><a href="/sessions/new">Already have an account? Log in</a></p>"#,
    )
}

pub fn login_page() -> String {
    layout(
        "Log in",
        r#"<h1>Log in</h1>
<form action="/sessions" method="post">
  <label>Email <input type="email" name="email"></label>
  <label>Password <input type="password" name="password"></label>
  <button type="submit">Log in</button>
</form>
<p><a href="/users/new">New here? Sign up</a></p>"#,
    )
}

pub fn bookmarks_page(user: Option<&PublicUser>, bookmarks: &[Bookmark]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Bookmarks</h1>\n");

    match user {
        Some(u) => {
            body.push_str(&format!("<p>Welcome, {}</p>\n", escape(&u.email)));
            body.push_str(
            r#"<form action="/sessions/delete" method="post"><button type="submit">Log out</button></form>
"#,
            );
            body.push_str(
                r#"<form action="/bookmarks" method="post">
  <label>URL <input type="url" name="url"></label>
  <label>Title <input type="text" name="title"></label>
  <button type="submit">Add bookmark</button>
</form>
"#,
            );
            if bookmarks.is_empty() {
                body.push_str("<p>No bookmarks yet.</p>\n");
            } else {
                body.push_str("<ul>\n");
                for b in bookmarks {
                    body.push_str(&format!(
                        "  <li><a href=\"{}\">{}</a></li>\n",
                        escape(&b.url),
                        escape(&b.title),
                    ));
                }
                body.push_str("</ul>\n");
            }
        }
        None => {
            body.push_str(
                r#"<p><a href="/users/new">Sign up</a> or <a href="/sessions/new">log in</a> to keep bookmarks.</p>
"#,
            );
        }
    }

    layout("Bookmarks", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<script>"a&b"</script>"#),
            "&lt;script&gt;&quot;a&amp;b&quot;&lt;/script&gt;"
        );
        assert_eq!(escape("plain@example.com"), "plain@example.com");
    }

    #[test]
    fn register_page_posts_to_users() {
        let html = register_page();
        assert!(html.contains(r#"action="/users""#));
        assert!(html.contains(r#"name="email""#));
        assert!(html.contains(r#"name="password""#));
    }

    #[test]
    fn bookmarks_page_greets_logged_in_user() {
        let user = PublicUser {
            id: 7,
            email: "alice@example.com".into(),
        };
        let html = bookmarks_page(Some(&user), &[]);
        assert!(html.contains("Welcome, alice@example.com"));
        assert!(html.contains("No bookmarks yet."));
    }

    #[test]
    fn bookmarks_page_escapes_email() {
        let user = PublicUser {
            id: 7,
            email: "<bob>@example.com".into(),
        };
        let html = bookmarks_page(Some(&user), &[]);
        assert!(html.contains("Welcome, &lt;bob&gt;@example.com"));
        assert!(!html.contains("<bob>"));
    }

    #[test]
    fn bookmarks_page_lists_entries() {
        let user = PublicUser {
            id: 1,
            email: "alice@example.com".into(),
        };
        let bookmarks = vec![Bookmark {
            id: 1,
            user_id: 1,
            url: "https://example.com".into(),
            title: "Example".into(),
            created_at: OffsetDateTime::UNIX_EPOCH,
        }];
        let html = bookmarks_page(Some(&user), &bookmarks);
        assert!(html.contains(r#"<a href="https://example.com">Example</a>"#));
    }

    #[test]
    fn bookmarks_page_anonymous_offers_signup() {
        let html = bookmarks_page(None, &[]);
        assert!(!html.contains("Welcome,"));
        assert!(html.contains(r#"href="/users/new""#));
    }
}
