//! End-to-end tests for the client shell

use chrono::NaiveDate;
use cyclecoach_cli::commands::{export_journal, import_journal, send_turn};
use cyclecoach_cli::journal::MessageKind;
use cyclecoach_cli::{CliError, Config, JournalStore, Session};
use cyclecoach_domain::Mood;
use cyclecoach_extractor::Extractor;
use cyclecoach_llm::{MockGateway, ModelSelector};
use cyclecoach_vault::{PassphraseVault, VaultError};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn vault() -> PassphraseVault {
    PassphraseVault::new().with_iterations(1_000)
}

fn claude_session() -> Session {
    let mut session = Session::new(ModelSelector::Claude);
    session.set_credential("sk-ant-api03-test", None).unwrap();
    session
}

#[tokio::test]
async fn test_chat_export_import_flow() {
    let dir = tempfile::tempdir().unwrap();
    let mut journal = JournalStore::open(dir.path().join("journal.json")).unwrap();
    let gateway = MockGateway::new("Warmth and rest can help.");

    let turn = send_turn(
        "Last monday my period started, bloating and headache, feeling anxious",
        &claude_session(),
        &Extractor::new(),
        &gateway,
        &mut journal,
        today(),
    )
    .await
    .unwrap();
    assert_eq!(turn.summary.period_start(), "October 12");
    journal.set_notes(today(), "hot water bottle");
    journal.save().unwrap();

    let export_path = dir.path().join("backup.qcycle");
    export_journal(&journal, &vault(), "pass phrase", Some(export_path.as_path()), today()).unwrap();
    let blob = std::fs::read_to_string(&export_path).unwrap();
    assert!(!blob.contains("bloating"));

    let mut restored = JournalStore::open(dir.path().join("restored.json")).unwrap();
    let days = import_journal(&mut restored, &vault(), &export_path, "pass phrase", false).unwrap();
    assert_eq!(days, 1);

    let day = restored.day(today()).unwrap();
    assert_eq!(day.notes, "hot water bottle");
    assert_eq!(day.chat.len(), 3);
    assert_eq!(day.chat[1].kind, MessageKind::Summary);
    assert_eq!(day.chat[1].text, turn.serialized);
    assert_eq!(day.chat[2].text, "Warmth and rest can help.");

    // Importing the same file again adds nothing
    import_journal(&mut restored, &vault(), &export_path, "pass phrase", false).unwrap();
    assert_eq!(restored.day(today()).unwrap().chat.len(), 3);
}

#[test]
fn test_import_wrong_passphrase_leaves_journal() {
    let dir = tempfile::tempdir().unwrap();
    let mut journal = JournalStore::open(dir.path().join("journal.json")).unwrap();
    journal.set_notes(today(), "keep me");

    let export_path = dir.path().join("backup.qcycle");
    export_journal(&journal, &vault(), "right", Some(export_path.as_path()), today()).unwrap();

    let result = import_journal(&mut journal, &vault(), &export_path, "wrong", true);
    assert!(matches!(result, Err(CliError::Vault(VaultError::WrongPassphrase))));
    assert_eq!(journal.day(today()).unwrap().notes, "keep me");
}

#[test]
fn test_export_requires_passphrase() {
    let dir = tempfile::tempdir().unwrap();
    let journal = JournalStore::open(dir.path().join("journal.json")).unwrap();
    let out = dir.path().join("out.qcycle");

    let result = export_journal(&journal, &vault(), "", Some(out.as_path()), today());
    assert!(matches!(result, Err(CliError::Vault(VaultError::MissingPassphrase))));
    assert!(!out.exists());
}

#[test]
fn test_import_rejects_foreign_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut journal = JournalStore::open(dir.path().join("journal.json")).unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "just some text").unwrap();

    let result = import_journal(&mut journal, &vault(), &path, "pw", false);
    assert!(matches!(result, Err(CliError::Vault(VaultError::MalformedBlob(_)))));
}

#[test]
fn test_lexicon_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "model = \"qwen\"\n\n[lexicon]\nextra_symptoms = [\"hot flashes\"]\nextra_positive_words = [\"grateful\"]\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    let extractor = Extractor::from_config(&config.lexicon).unwrap();
    let summary = extractor.extract_on("hot flashes today but grateful", today());

    assert_eq!(summary.symptoms(), ["hotFlashes".to_string()]);
    assert_eq!(summary.mood(), Mood::Positive);
}
