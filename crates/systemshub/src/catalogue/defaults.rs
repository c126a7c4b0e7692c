//! Built-in catalogue data.
//!
//! Used when the configuration file does not define `[[items]]`.

use super::Item;

#[allow(clippy::too_many_arguments)]
fn item(
    key: &str,
    title: &str,
    display_name: &str,
    description: &str,
    icon: &str,
    gradient: (&str, &str),
    wait_seconds: u32,
    tags: &[&str],
) -> Item {
    Item {
        key: key.to_string(),
        title: title.to_string(),
        display_name: display_name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        thumbnail_url: None,
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        dev_notes_url: format!("https://github.com/m-hito/BrawlDevNotes#{key}"),
        repo_url: String::new(),
        video_url: String::new(),
        wait_seconds,
        featured: false,
        notes: None,
        gradient_from: Some(gradient.0.to_string()),
        gradient_to: Some(gradient.1.to_string()),
    }
}

/// The default catalogue, in display order.
#[must_use]
pub fn builtin_items() -> Vec<Item> {
    vec![
        Item {
            repo_url: "https://ouo.io/pBHIkz".to_string(),
            video_url: "https://youtube.com/watch?v=movement-tutorial".to_string(),
            notes: Some(
                "BrawlDev: Give NPC's tool, use humanoid method to activate it and make them combat NPCs"
                    .to_string(),
            ),
            ..item(
                "movement-system",
                "Roblox NPC Movement System v1.0",
                "Movement System",
                "Give any NPC movement scales up to 100s of NPCs, make them combat NPCs yourself — blueprint is ready.",
                "🏃",
                ("#8B5CF6", "#6366F1"),
                15,
                &["movement", "npc", "pathfinding"],
            )
        },
        Item {
            repo_url: "https://ouo.io/MrWrM2".to_string(),
            video_url: "https://youtube.com/watch?v=npc-tutorial".to_string(),
            notes: Some("BrawlDev: Use CollectionService for NPC tagging".to_string()),
            ..item(
                "npc-factory",
                "Advanced Roblox NPC Factory v1.0",
                "NPC Factory",
                "Spawn NPCs with pathfinding, combat AI, squad behavior — production-ready system.",
                "🤖",
                ("#EF4444", "#F97316"),
                12,
                &["npc", "ai", "pathfinding", "squad"],
            )
        },
        Item {
            thumbnail_url: Some("https://i.postimg.cc/yYW9HHk4/Thumbnail-Poison.png".to_string()),
            repo_url: "https://ouo.io/j1lnPH".to_string(),
            video_url: "https://youtube.com/watch?v=combat-tutorial".to_string(),
            notes: Some("Adding airborne combat in combat system v2".to_string()),
            featured: true,
            ..item(
                "combat-system",
                "Advanced Roblox Combat System v1.0",
                "Combat System",
                "5-combo modular combat system with state handling — competitive-ready.",
                "⚔️",
                ("#3B82F6", "#06B6D4"),
                12,
                &["combat", "pvp", "modular"],
            )
        },
        Item {
            thumbnail_url: Some(
                "https://media.craiyon.com/2025-10-05/KJYaL92KRJiwuymNfwK6ZA.webp".to_string(),
            ),
            repo_url: "https://ouo.io/6pHQfv".to_string(),
            video_url: "https://youtube.com/watch?v=your-wave-tutorial".to_string(),
            notes: Some("BrawlDev: Modular factory + state service architecture".to_string()),
            ..item(
                "wave-system",
                "ECS Wave System v1.0",
                "Wave System",
                "Modular ECS wave spawner with scaling difficulty, factory pattern, and data-driven progression.",
                "🌊",
                ("#10B981", "#059669"),
                18,
                &["ecs", "waves", "spawner", "progression"],
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_items_have_links() {
        for item in builtin_items() {
            assert!(!item.repo_url.is_empty(), "{} has no repo url", item.key);
            assert!(!item.video_url.is_empty(), "{} has no video url", item.key);
            assert!(item.dev_notes_url.ends_with(&item.key));
        }
    }

    #[test]
    fn test_exactly_one_builtin_featured() {
        let featured: Vec<_> = builtin_items().into_iter().filter(|i| i.featured).collect();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].display_name, "Combat System");
    }
}
