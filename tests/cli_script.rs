use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::tempdir;

fn shell(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pocketbook_cli").unwrap();
    cmd.env("POCKETBOOK_HOME", home)
        .env("POCKETBOOK_CLI_SCRIPT", "1")
        .env("POCKETBOOK_TODAY", "2024-05-15")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_adds_and_summarizes() {
    let home = tempdir().unwrap();
    let input = "\
add income 5000000 Salary Checking 2024-05-01
add expense 200000 Food Cash 2024-05-02 groceries
dashboard
accounts
exit
";

    shell(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Transaction added"))
        .stdout(contains("Total balance    : $4,800,000.00"))
        .stdout(contains("Monthly income   : $5,000,000.00"))
        .stdout(contains("Monthly expenses : $200,000.00"))
        .stdout(contains("Cash          : -$200,000.00"))
        .stdout(contains("Net worth     : $4,800,000.00"))
        .stdout(contains("groceries"));

    let stored = fs::read_to_string(home.path().join("transactions.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&stored).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["type"], "expense");
    assert_eq!(records[0]["date"], "2024-05-02");
    assert_eq!(records[1]["category"], "Salary");
    assert!(records[0]["id"].as_i64().unwrap() > records[1]["id"].as_i64().unwrap());
}

#[test]
fn ledger_survives_restart_and_filters() {
    let home = tempdir().unwrap();
    shell(home.path())
        .write_stdin(
            "add income 100 Gift Savings 2024-04-20\nadd expense 30 Transport Cash 2024-05-03 bus\n",
        )
        .assert()
        .success();

    shell(home.path())
        .write_stdin("history --type expense\nhistory --type all --to 2024-04-30\n")
        .assert()
        .success()
        .stdout(contains("bus"))
        .stdout(contains("Showing 1 of 2 transactions"))
        .stdout(contains("Filter: to=2024-04-30"))
        .stdout(contains("Gift"));
}

#[test]
fn empty_states_use_fixed_messages() {
    let home = tempdir().unwrap();
    shell(home.path())
        .write_stdin("dashboard\nhistory --category Food\n")
        .assert()
        .success()
        .stdout(contains("No transactions yet."))
        .stdout(contains("No matching transactions."));
}

#[test]
fn invalid_amount_is_rejected_without_writing() {
    let home = tempdir().unwrap();
    shell(home.path())
        .write_stdin("add expense abc Food Cash\n")
        .assert()
        .success()
        .stdout(contains("`abc` is not a number"))
        .stdout(contains("Transaction added").not());

    assert!(!home.path().join("transactions.json").exists());
}

#[test]
fn unknown_command_gets_a_suggestion() {
    let home = tempdir().unwrap();
    shell(home.path())
        .write_stdin("histroy\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `histroy`"))
        .stdout(contains("Suggestion: `history`?"));
}

#[test]
fn indonesian_locale_formats_rupiah() {
    let home = tempdir().unwrap();
    let input = "\
config set locale id-ID
config set currency IDR
add expense 200000 makanan tunai 2024-05-02
accounts
";
    shell(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Transaksi berhasil ditambahkan"))
        .stdout(contains("=== Akun ==="))
        .stdout(contains("Tunai         : -Rp 200.000"))
        .stdout(contains("Rekening      : Rp 0"));

    let stored = fs::read_to_string(home.path().join("transactions.json")).unwrap();
    assert!(stored.contains("\"category\":\"Makanan\""));
    assert!(stored.contains("\"account\":\"Tunai\""));
}

#[test]
fn corrupt_ledger_starts_empty_with_a_warning() {
    let home = tempdir().unwrap();
    fs::write(home.path().join("transactions.json"), "{oops").unwrap();
    shell(home.path())
        .write_stdin("dashboard\n")
        .assert()
        .success()
        .stdout(contains("No transactions yet."))
        .stdout(contains("could not be read and was moved to"))
        .stderr(contains("stored ledger unreadable"));

    let kept: Vec<_> = fs::read_dir(home.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .starts_with("transactions.json.corrupt-")
        })
        .collect();
    assert_eq!(kept.len(), 1);
    assert_eq!(fs::read_to_string(kept[0].path()).unwrap(), "{oops");
}

#[test]
fn unknown_account_is_kept_but_not_balanced() {
    let home = tempdir().unwrap();
    shell(home.path())
        .write_stdin("add expense 10 Food Wallet\naccounts\nhistory\n")
        .assert()
        .success()
        .stdout(contains("`Wallet` is not a known account"))
        .stdout(contains("Net worth     : $0.00"))
        .stdout(contains("1 transaction with an unknown account not included"))
        .stdout(contains("Showing 1 of 1 transactions"));
}
