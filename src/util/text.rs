use itertools::Itertools;
use serenity::all::{Permissions, UserId};
use std::fmt::Display;

pub(crate) fn bot_invite_url(
    id: UserId,
    permissions: Permissions,
    with_slash_commands: bool,
) -> String {
    let perms_section = permissions.bits().to_string();
    format!(
        "https://discord.com/oauth2/authorize?client_id={id}&permissions={perms_section}&integration_type=0&scope=bot{}",
        if with_slash_commands {
            "+applications.commands"
        } else {
            ""
        }
    )
}

/// Formats a user id as a ping, without touching the cache
pub(crate) fn mention(id: u64) -> String {
    format!("<@{id}>")
}

pub(crate) fn comma_join(mut items: impl ExactSizeIterator<Item = impl Display>) -> String {
    match items.len() {
        0 => String::from(""),
        1 => items.next().unwrap().to_string(),
        2 => format!("{} and {}", items.next().unwrap(), items.next().unwrap()),
        _ => {
            let all = items.map(|it| it.to_string()).collect_vec();
            format!(
                "{}, and {}",
                all[..all.len() - 1].join(", "),
                all[all.len() - 1]
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_join_lists() {
        assert_eq!(comma_join(Vec::<&str>::new().into_iter()), "");
        assert_eq!(comma_join(["ana"].iter()), "ana");
        assert_eq!(comma_join(["ana", "bo"].iter()), "ana and bo");
        assert_eq!(comma_join(["ana", "bo", "cy"].iter()), "ana, bo, and cy");
    }

    #[test]
    fn invite_url_includes_scope() {
        let url = bot_invite_url(UserId::new(42), Permissions::SEND_MESSAGES, true);
        assert!(url.contains("client_id=42"));
        assert!(url.contains("permissions=2048"));
        assert!(url.ends_with("scope=bot+applications.commands"));

        let url = bot_invite_url(UserId::new(42), Permissions::empty(), false);
        assert!(url.ends_with("scope=bot"));
    }

    #[test]
    fn mention_formats_ping() {
        assert_eq!(mention(1234), "<@1234>");
    }
}
