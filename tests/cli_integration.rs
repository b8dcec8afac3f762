use serde_json::{Value, json};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

const DAY_IDS: [(&str, &str); 7] = [
    ("sunday", "day-sun"),
    ("monday", "day-mon"),
    ("tuesday", "day-tue"),
    ("wednesday", "day-wed"),
    ("thursday", "day-thu"),
    ("friday", "day-fri"),
    ("saturday", "day-sat"),
];

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write test file");
}

/// Home directory with a config file naming the seven day pages
fn home_with_config() -> TempDir {
    let home = TempDir::new().expect("temp dir");
    let mut config = String::from("[days]\n");
    for (day, id) in DAY_IDS {
        config.push_str(&format!("{day} = \"{id}\"\n"));
    }
    write_file(&home.path().join(".config/mealbot/config.toml"), &config);
    home
}

fn page(id: &str, name: &str, tags: &[&str], days: &[&str]) -> Value {
    json!({
        "object": "page",
        "id": id,
        "properties": {
            "Name": {"type": "title", "title": [{"type": "text", "plain_text": name}]},
            "Tags": {"type": "multi_select", "multi_select": tags.iter().map(|t| json!({"name": t})).collect::<Vec<_>>()},
            "When": {"type": "relation", "relation": days.iter().map(|d| json!({"id": d})).collect::<Vec<_>>()},
        }
    })
}

/// `per_slot` recipes for each of breakfast, lunch and dinner
fn write_snapshot(home: &Path, per_slot: usize, extra: Vec<Value>) {
    let mut pages = extra;
    for slot in ["Breakfast", "Lunch", "Dinner"] {
        for i in 0..per_slot {
            let id = format!("{}-{i}", slot.to_lowercase());
            pages.push(page(&id, &format!("{slot} {i}"), &[slot], &[]));
        }
    }
    write_file(
        &home.join(".cache/mealbot/recipes.json"),
        &serde_json::to_string(&pages).expect("snapshot json"),
    );
}

fn run_mealbot(args: &[&str], home: &Path) -> (bool, Vec<u8>, Vec<u8>) {
    let bin = std::env::var("CARGO_BIN_EXE_mealbot").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("mealbot.exe");
        } else {
            path.push("mealbot");
        }
        path.to_string_lossy().into_owned()
    });
    let mut cmd = Command::new(bin);
    cmd.args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("NOTION_KEY")
        .env_remove("NOTION_DB_ID")
        .env_remove("DISCORD_WEBHOOK_URL")
        .env_remove("MEALBOT_TIMEZONE")
        .env_remove("RUST_LOG");
    let output = cmd.output().expect("run mealbot");
    (output.status.success(), output.stdout, output.stderr)
}

fn plan_json(home: &Path, date: &str) -> Value {
    let (ok, stdout, stderr) = run_mealbot(&["plan", "--offline", "--json", "--date", date], home);
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    serde_json::from_slice(&stdout).expect("json")
}

#[test]
fn offline_plan_picks_21_distinct_meals() {
    let home = home_with_config();
    write_snapshot(home.path(), 10, vec![]);

    let json = plan_json(home.path(), "2026-10-19");

    assert_eq!(json["seed"].as_str(), Some("202643"));
    assert_eq!(json["dry_run"].as_bool(), Some(true));
    assert_eq!(json["updates"].as_u64(), Some(30));

    let mut names = HashSet::new();
    for slot in ["Breakfast", "Lunch", "Dinner"] {
        let picks = json["plan"][slot].as_array().expect("slot array");
        assert_eq!(picks.len(), 7);
        for pick in picks {
            let name = pick.as_str().expect("name");
            assert!(name.starts_with(slot), "{name} planned for {slot}");
            names.insert(name.to_string());
        }
    }
    assert_eq!(names.len(), 21);
}

#[test]
fn offline_plan_is_stable_within_a_week() {
    let home = home_with_config();
    write_snapshot(home.path(), 12, vec![]);

    let monday = plan_json(home.path(), "2026-10-19");
    let saturday = plan_json(home.path(), "20261024");
    let next_week = plan_json(home.path(), "2026-10-26");

    assert_eq!(monday["plan"], saturday["plan"]);
    assert_eq!(next_week["seed"].as_str(), Some("202644"));
}

#[test]
fn insufficient_recipes_fail_the_plan() {
    let home = home_with_config();
    write_snapshot(home.path(), 6, vec![]);

    let (ok, _stdout, stderr) = run_mealbot(&["plan", "--offline", "--date", "2026-10-19"], home.path());

    assert!(!ok);
    let stderr = String::from_utf8_lossy(&stderr);
    assert!(stderr.contains("Not enough Breakfast recipes"), "stderr: {stderr}");
}

#[test]
fn offline_meals_groups_by_day() {
    let home = home_with_config();
    write_snapshot(
        home.path(),
        0,
        vec![
            page("p1", "Pancakes", &["Breakfast"], &["day-mon"]),
            page("p2", "Ramen", &["Dinner"], &["day-mon", "day-fri"]),
            page("p3", "Toast", &["Breakfast"], &[]),
        ],
    );

    let (ok, stdout, stderr) = run_mealbot(&["meals", "--offline", "--json"], home.path());
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let json: Value = serde_json::from_slice(&stdout).expect("json");
    let days = json.as_object().expect("object output");
    assert_eq!(days.len(), 2);
    assert_eq!(json["Monday"], json!(["Pancakes", "Ramen"]));
    assert_eq!(json["Friday"], json!(["Ramen"]));
}

#[test]
fn offline_meals_with_nothing_planned() {
    let home = home_with_config();
    write_snapshot(home.path(), 3, vec![]);

    let (ok, stdout, _stderr) = run_mealbot(&["meals", "--offline"], home.path());

    assert!(ok);
    assert_eq!(String::from_utf8_lossy(&stdout).trim(), "No meals are currently planned.");
}

#[test]
fn chat_help_lists_commands() {
    let home = home_with_config();
    write_snapshot(home.path(), 0, vec![]);

    let (ok, stdout, stderr) = run_mealbot(&["chat", "!help", "--offline"], home.path());
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));

    let out = String::from_utf8_lossy(&stdout);
    assert!(out.starts_with("```"));
    for command in ["!meals", "!plan", "!help"] {
        assert!(out.contains(command), "missing {command} in {out}");
    }
}

#[test]
fn chat_unknown_command_suggests_help() {
    let home = home_with_config();
    write_snapshot(home.path(), 0, vec![]);

    let (ok, stdout, _stderr) = run_mealbot(&["chat", "!dessert", "--offline"], home.path());

    assert!(ok);
    assert_eq!(
        String::from_utf8_lossy(&stdout).trim(),
        "Unknown command `!dessert`. Try `!help`."
    );
}

#[test]
fn missing_snapshot_is_reported() {
    let home = home_with_config();

    let (ok, _stdout, stderr) = run_mealbot(&["meals", "--offline"], home.path());

    assert!(!ok);
    let stderr = String::from_utf8_lossy(&stderr);
    assert!(stderr.contains("recipes.json"), "stderr: {stderr}");
}

#[test]
fn online_without_credentials_names_env_var() {
    let home = home_with_config();

    let (ok, _stdout, stderr) = run_mealbot(&["meals"], home.path());

    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("NOTION_KEY"));
}
