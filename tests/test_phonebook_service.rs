//! Tests for phonebook assembly over a contact source.

mod mocks;

use mocks::MockContactSource;
use phonebook_converter::conversion::{ConfigFile, Converter, PhonebookSettings};
use phonebook_converter::models::SourceContact;
use phonebook_converter::services::{PhonebookService, PhonebookServiceImpl};
use phonebook_converter::sources::{ContactSource, JsonFileSource};
use phonebook_converter::PhonebookError;
use std::io::Write;
use std::sync::Arc;

const CONFIG: &str = r#"{
    "phonebook": {"id": 0, "name": "Telefonbuch"},
    "filters": {"exclude": {"categories": ["private"]}},
    "conversions": {
        "vip": {"category": ["vip1"]},
        "realName": ["{lastname}, {firstname}", "{org}", "{fullname}"],
        "phoneTypes": {"WORK": "work", "HOME": "home", "CELL": "mobile", "FAX": "fax_work"},
        "emailTypes": {"WORK": "work", "HOME": "home"},
        "phoneReplaceCharacters": {"+49": "0", " ": "", "-": ""}
    }
}"#;

fn service_with(
    source: Arc<dyn ContactSource>,
    phonebook: Option<PhonebookSettings>,
) -> PhonebookServiceImpl {
    let file = ConfigFile::from_json_str(CONFIG).unwrap();
    let converter = Converter::new(file.conversion).unwrap();
    PhonebookServiceImpl::new(
        source,
        Arc::new(converter),
        phonebook.unwrap_or(file.phonebook),
        4,
    )
}

fn person(id: &str, first: &str, last: &str) -> SourceContact {
    let mut contact = SourceContact::new(id);
    contact.names.first = Some(first.to_string());
    contact.names.last = Some(last.to_string());
    contact
}

#[tokio::test]
async fn test_build_phonebook_from_mock_source() {
    let source = MockContactSource::new();

    let mut alice = person("a", "Alice", "Smith").with_phone("+49 30 111-222", ["home", "pref"]);
    alice.categories.insert("vip1".to_string());
    alice.quickdial = Some("1".to_string());

    let mut hidden = person("h", "Hidden", "Person").with_phone("123", ["home"]);
    hidden.categories.insert("private".to_string());

    let no_phone = person("n", "No", "Phone").with_email("no@phone.example", ["home"]);

    let mut acme = SourceContact::new("o").with_phone("0800 1234", ["work"]);
    acme.names.organization = Some("ACME".to_string());

    source.add_contacts(vec![alice, hidden, no_phone, acme]);

    let service = service_with(Arc::new(source.clone()), None);
    let phonebook = service.build_phonebook().await.unwrap();

    assert_eq!(source.fetch_count(), 1);
    assert_eq!(phonebook.entries.len(), 2);

    let first = &phonebook.entries[0];
    assert_eq!(first.source_id, "a");
    assert_eq!(first.real_name, "Smith, Alice");
    assert!(first.is_vip);
    assert_eq!(first.numbers[0].value, "030111222");
    assert_eq!(first.numbers[0].quickdial.as_deref(), Some("1"));

    let second = &phonebook.entries[1];
    assert_eq!(second.real_name, "ACME");
    assert!(!second.is_vip);
    assert_eq!(second.numbers[0].target_type, "work");
    assert_eq!(second.numbers[0].value, "08001234");

    let summary = service.metrics().summary();
    assert_eq!(summary.contacts_seen_total, 4);
    assert_eq!(summary.contacts_filtered_total, 1);
    assert_eq!(summary.contacts_without_phone_total, 1);
    assert_eq!(summary.entries_emitted_total, 2);
}

#[tokio::test]
async fn test_split_contacts_stay_adjacent() {
    let source = MockContactSource::new();
    source.add_contact(person("first", "A", "A").with_phone("1", ["home"]));

    let mut many = person("many", "B", "B");
    for i in 0..20 {
        many = many.with_phone(format!("2{:02}", i), ["cell"]);
    }
    source.add_contact(many);
    source.add_contact(person("last", "C", "C").with_phone("3", ["work"]));

    let service = service_with(Arc::new(source), None);
    let phonebook = service.build_phonebook().await.unwrap();

    let ids: Vec<&str> = phonebook
        .entries
        .iter()
        .map(|e| e.source_id.as_str())
        .collect();
    assert_eq!(ids, vec!["first", "many", "many", "many", "last"]);
    assert_eq!(service.metrics().contacts_split_total(), 1);
}

#[tokio::test]
async fn test_non_default_phonebook_drops_shortcuts() {
    let source = MockContactSource::new();
    let mut contact = person("a", "Alice", "Smith").with_phone("1", ["pref"]);
    contact.quickdial = Some("1".to_string());
    contact.vanity = Some("ALICE".to_string());
    source.add_contact(contact);

    let settings = PhonebookSettings {
        id: 1,
        name: "Second".to_string(),
    };
    let service = service_with(Arc::new(source), Some(settings));
    let phonebook = service.build_phonebook().await.unwrap();

    assert_eq!(phonebook.id, 1);
    assert_eq!(phonebook.name, "Second");
    assert_eq!(phonebook.shortcut_count(), 0);
    assert!(phonebook.entries[0].numbers[0].is_preferred);
}

#[tokio::test]
async fn test_source_failure_is_reported() {
    let source = MockContactSource::new();
    source.fail_with("directory unavailable");

    let service = service_with(Arc::new(source), None);
    match service.build_phonebook().await {
        Err(PhonebookError::Source(e)) => assert!(e.to_string().contains("directory unavailable")),
        other => panic!("Expected source error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_build_phonebook_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"contacts": [
            {{"id": "uid-1", "names": {{"fullname": "Bob"}}, "phones": [{{"value": "5", "types": ["CELL"]}}]}},
            {{"id": "uid-2", "names": {{"fullname": "Eve"}}}}
        ]}}"#
    )
    .unwrap();

    let source = Arc::new(JsonFileSource::new(file.path())) as Arc<dyn ContactSource>;
    let service = service_with(source, None);
    let phonebook = service.build_phonebook().await.unwrap();

    assert_eq!(phonebook.entries.len(), 1);
    assert_eq!(phonebook.entries[0].real_name, "Bob");
    assert_eq!(phonebook.entries[0].numbers[0].target_type, "mobile");
}
