//! Integration tests for hwbot-i18n crate.
//!
//! These tests pin the exact chat texts; they are part of the user-facing
//! contract and must not drift.

use hwbot_common::test_utils::init_test_logging;
use hwbot_common::HomeworkStatus;
use hwbot_i18n::catalog;
use proptest::prelude::*;

#[test]
fn test_approved_notification() {
    init_test_logging();

    let text = catalog()
        .unwrap()
        .status_changed("hw1", HomeworkStatus::Approved)
        .unwrap();
    assert_eq!(
        text,
        "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
    );
}

#[test]
fn test_reviewing_notification() {
    let text = catalog()
        .unwrap()
        .status_changed("username__hw_python_oop.zip", HomeworkStatus::Reviewing)
        .unwrap();
    assert_eq!(
        text,
        "Изменился статус проверки работы \"username__hw_python_oop.zip\". Работа взята на проверку ревьюером."
    );
}

#[test]
fn test_rejected_notification() {
    let text = catalog()
        .unwrap()
        .status_changed("hw2", HomeworkStatus::Rejected)
        .unwrap();
    assert_eq!(
        text,
        "Изменился статус проверки работы \"hw2\". Работа проверена: у ревьюера есть замечания."
    );
}

#[test]
fn test_names_are_inserted_verbatim() {
    let text = catalog()
        .unwrap()
        .status_changed("Проект { $x } \"final\"", HomeworkStatus::Approved)
        .unwrap();
    assert!(text.starts_with("Изменился статус проверки работы \"Проект { $x } \"final\"\". "));
}

proptest! {
    #[test]
    fn test_status_changed_is_deterministic(name in "[A-Za-z0-9_ .-]{1,40}") {
        let catalog = catalog().unwrap();
        for status in HomeworkStatus::ALL {
            let first = catalog.status_changed(&name, status).unwrap();
            let second = catalog.status_changed(&name, status).unwrap();
            prop_assert_eq!(&first, &second);
            let expected_prefix = format!("Изменился статус проверки работы \"{name}\". ");
            prop_assert!(first.starts_with(&expected_prefix));
        }
    }
}
