use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "trackify";

fn trackify(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("TRACKIFY_DATA_DIR", dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn add(dir: &TempDir, description: &str, amount: &str, category: &str, date: &str) -> String {
    let output = trackify(dir)
        .args(["add", description, amount, category, "--date", date])
        .output()
        .expect("command runs");
    assert!(output.status.success(), "add failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).expect("utf8 output");
    stdout
        .lines()
        .find_map(|l| l.trim().strip_prefix("ID: "))
        .expect("id line")
        .to_string()
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    trackify(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data/expenses.json").exists());
    assert!(dir.path().join("data/budgets.json").exists());
}

#[test]
fn add_then_list_newest_first() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "3.50", "Food", "2024-01-05");
    add(&dir, "Bus", "2.75", "Transit", "2024-02-01");

    let output = trackify(&dir).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let bus = stdout.find("Bus").expect("bus listed");
    let coffee = stdout.find("Coffee").expect("coffee listed");
    assert!(bus < coffee);
    assert!(stdout.contains("$3.50"));
}

#[test]
fn list_filters_compose() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "3.50", "Food", "2024-01-05");
    add(&dir, "Bus", "2.75", "Transit", "2024-02-01");

    trackify(&dir)
        .args(["list", "--category", "Food", "--search", "cof"])
        .assert()
        .success()
        .stdout(contains("Coffee").and(contains("Bus").not()))
        .stdout(contains("(1 of 2)"));

    trackify(&dir)
        .args(["list", "--from", "2024-02-01"])
        .assert()
        .success()
        .stdout(contains("Bus").and(contains("Coffee").not()));
}

#[test]
fn edit_and_delete_by_short_id() {
    let dir = TempDir::new().unwrap();
    let id = add(&dir, "Coffee", "3.50", "Food", "2024-01-05");

    trackify(&dir)
        .args(["edit", &id, "--description", "Latte", "--amount", "4.75"])
        .assert()
        .success()
        .stdout(contains("Updated expense"));

    trackify(&dir)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(contains("Latte").and(contains("$4.75")));

    trackify(&dir).args(["delete", &id]).assert().success();

    trackify(&dir)
        .args(["show", &id])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn invalid_input_is_rejected() {
    let dir = TempDir::new().unwrap();

    trackify(&dir)
        .args(["add", "Coffee", "abc", "Food"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));

    trackify(&dir)
        .args(["add", "Coffee", "3.50", "Food", "--date", "05/01/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    trackify(&dir)
        .args(["add", "  ", "3.50", "Food"])
        .assert()
        .failure()
        .stderr(contains("Validation error"));
}

#[test]
fn budget_set_updates_in_place() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Groceries", "120", "Food", "2024-01-05");

    trackify(&dir)
        .args(["budget", "set", "Food", "100"])
        .assert()
        .success()
        .stdout(contains("Created budget"));

    trackify(&dir)
        .args(["budget", "set", "Food", "150"])
        .assert()
        .success()
        .stdout(contains("Updated budget"));

    trackify(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(contains("$150.00").and(contains("Over budget").not()));

    let budgets = std::fs::read_to_string(dir.path().join("data/budgets.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&budgets).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 1);
}

#[test]
fn budget_exceeded_is_reported() {
    let dir = TempDir::new().unwrap();
    trackify(&dir)
        .args(["budget", "set", "Food", "10"])
        .assert()
        .success();

    trackify(&dir)
        .args(["add", "Dinner", "25", "Food", "--date", "2024-01-05"])
        .assert()
        .success()
        .stdout(contains("over budget"));

    trackify(&dir)
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(contains("Over budget"));
}

#[test]
fn export_csv_to_stdout() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee, large", "3.50", "Food", "2024-01-05");
    add(&dir, "Bus", "2.75", "Transit", "2024-02-01");

    trackify(&dir)
        .args(["export", "-", "--category", "Food"])
        .assert()
        .success()
        .stdout(contains("ID,Date,Description,Category,Amount"))
        .stdout(contains("\"Coffee, large\",Food,3.50"))
        .stdout(contains("Bus").not());
}

#[test]
fn export_analytics_ignores_filter() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "3.50", "Food", "2024-01-05");
    add(&dir, "Bus", "2.75", "Transit", "2024-02-01");

    let out = dir.path().join("out.json");
    trackify(&dir)
        .args(["export", out.to_str().unwrap(), "--format", "json", "--view", "analytics"])
        .args(["--category", "Food"])
        .assert()
        .success()
        .stdout(contains("Exported 2 expense(s)"));

    let text = std::fs::read_to_string(out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["expenses"].as_array().unwrap().len(), 2);
}

#[test]
fn stats_and_charts() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "3.50", "Food", "2024-01-05");
    add(&dir, "Rent", "800", "Housing", "2024-01-01");

    trackify(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(contains("Total Spent").and(contains("$803.50")));

    trackify(&dir)
        .args(["charts", "--width", "10"])
        .assert()
        .success()
        .stdout(contains("Monthly Trend").and(contains("2024-01")));
}

#[test]
fn corrupt_data_fails_fast() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data/expenses.json"), "not json").unwrap();

    trackify(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(contains("expenses.json"));
}

#[test]
fn default_view_is_overview() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "3.50", "Food", "2024-01-05");

    trackify(&dir)
        .assert()
        .success()
        .stdout(contains("Statistics").and(contains("Coffee")));
}

#[test]
fn read_only_commands_leave_disk_untouched() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("trackify");

    for args in [["config"], ["list"], ["stats"]] {
        Command::cargo_bin(BIN_NAME)
            .unwrap()
            .env("TRACKIFY_DATA_DIR", &base)
            .args(args)
            .assert()
            .success();
    }

    assert!(!base.exists());

    Command::cargo_bin(BIN_NAME)
        .unwrap()
        .env("TRACKIFY_DATA_DIR", &base)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Initialized:     false"));
}

#[test]
fn category_named_all_uppercase_is_a_real_category() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Misc", "1.00", "ALL", "2024-01-05");
    add(&dir, "Coffee", "3.50", "Food", "2024-01-05");

    trackify(&dir)
        .args(["list", "--category", "ALL"])
        .assert()
        .success()
        .stdout(contains("Misc").and(contains("Coffee").not()));
}
