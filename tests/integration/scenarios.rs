use rootbrowse::{BrowseError, Browser, Classification, Entry, RootContext};
use tempfile::TempDir;

use crate::integration::support::{empty_root, folder_listing};

#[test]
fn nested_folder_creation_shows_in_root_listing() {
    let (temp, browser) = empty_root();
    browser.mutations().create_folder("a/b").unwrap();

    assert!(temp.path().join("a").is_dir());
    assert!(temp.path().join("a/b").is_dir());
    assert_eq!(folder_listing(&browser, ""), vec!["a"]);
    assert_eq!(folder_listing(&browser, "a"), vec!["b"]);
}

#[test]
fn created_file_reads_back_with_metadata() {
    let (_temp, browser) = empty_root();
    browser.mutations().create_file("a.txt", "hello").unwrap();

    match browser.browse("a.txt").unwrap() {
        Entry::File { metadata, content } => {
            assert_eq!(metadata.name, "a");
            assert_eq!(metadata.size, 5);
            assert_eq!(content, "hello");
        }
        other => panic!("expected file, got {:?}", other),
    }
}

#[test]
fn unicode_content_round_trips() {
    let (_temp, browser) = empty_root();
    let content = "héllo wörld ✓ 🦀 日本語\nsecond line";
    browser.mutations().create_file("uni.txt", content).unwrap();

    match browser.browse("uni.txt").unwrap() {
        Entry::File { metadata, content: read } => {
            assert_eq!(read, content);
            assert_eq!(metadata.size, content.len() as u64);
        }
        other => panic!("expected file, got {:?}", other),
    }
}

#[test]
fn reading_non_text_file_is_unsupported() {
    let (temp, browser) = empty_root();
    std::fs::write(temp.path().join("a.py"), "print('x')").unwrap();
    assert!(matches!(
        browser.browse("a.py"),
        Err(BrowseError::UnsupportedType(_))
    ));
}

#[test]
fn repeated_creation_reports_already_exists() {
    let (_temp, browser) = empty_root();
    let mutations = browser.mutations();
    mutations.create_folder("docs").unwrap();
    assert!(matches!(
        mutations.create_folder("docs"),
        Err(BrowseError::AlreadyExists(_))
    ));

    mutations.create_file("docs/a.txt", "x").unwrap();
    assert!(matches!(
        mutations.create_file("docs/a.txt", "y"),
        Err(BrowseError::AlreadyExists(_))
    ));
}

#[test]
fn delete_folder_needs_empty_folder_first() {
    let (_temp, browser) = empty_root();
    let mutations = browser.mutations();
    mutations.create_folder("work").unwrap();
    mutations.create_file("work/one.txt", "1").unwrap();

    assert!(matches!(
        mutations.delete_folder("work"),
        Err(BrowseError::NotEmpty(_))
    ));

    mutations.empty_folder("work").unwrap();
    assert!(folder_listing(&browser, "work").is_empty());
    assert_eq!(
        browser.resolve("work").unwrap().classification(),
        Classification::Folder
    );

    mutations.delete_folder("work").unwrap();
    assert_eq!(
        browser.resolve("work").unwrap().classification(),
        Classification::Missing
    );
}

#[test]
fn empty_folder_clears_nested_tree() {
    let (_temp, browser) = empty_root();
    let mutations = browser.mutations();
    mutations.create_folder("tree/x/y/z").unwrap();
    mutations.create_file("tree/top.txt", "t").unwrap();
    mutations.create_file("tree/x/y/leaf.txt", "l").unwrap();

    mutations.empty_folder("tree").unwrap();
    assert!(folder_listing(&browser, "tree").is_empty());
}

#[test]
fn listing_includes_dotfiles() {
    let (temp, browser) = empty_root();
    std::fs::write(temp.path().join(".hidden.txt"), "secret").unwrap();
    std::fs::write(temp.path().join("shown.txt"), "plain").unwrap();

    assert_eq!(folder_listing(&browser, ""), vec![".hidden.txt", "shown.txt"]);
}

#[test]
fn empty_folder_lists_as_empty() {
    let (_temp, browser) = empty_root();
    browser.mutations().create_folder("void").unwrap();
    assert_eq!(
        browser.browse("void").unwrap(),
        Entry::Folder { listing: vec![] }
    );
}

#[test]
fn delete_file_then_browse_is_not_found() {
    let (_temp, browser) = empty_root();
    browser.mutations().create_file("gone.txt", "bye").unwrap();
    browser.mutations().delete_file("gone.txt").unwrap();
    assert!(matches!(
        browser.browse("gone.txt"),
        Err(BrowseError::NotFound(_))
    ));
}

#[test]
fn escapes_above_root_are_rejected() {
    let outer = TempDir::new().unwrap();
    let inner = outer.path().join("root");
    std::fs::create_dir(&inner).unwrap();
    std::fs::write(outer.path().join("outside.txt"), "no").unwrap();
    let browser = Browser::new(RootContext::new(&inner).unwrap());

    assert!(matches!(
        browser.browse("../outside.txt"),
        Err(BrowseError::OutOfScope(_))
    ));
    assert!(matches!(
        browser.mutations().delete_file("../outside.txt"),
        Err(BrowseError::OutOfScope(_))
    ));
    assert!(matches!(
        browser.mutations().create_folder("a/../../escape"),
        Err(BrowseError::OutOfScope(_))
    ));
    assert!(outer.path().join("outside.txt").is_file());
    assert!(!outer.path().join("escape").exists());
}

#[test]
fn two_roots_coexist() {
    let (temp_a, browser_a) = empty_root();
    let (_temp_b, browser_b) = empty_root();
    browser_a.mutations().create_file("only-a.txt", "a").unwrap();

    assert_eq!(folder_listing(&browser_a, ""), vec!["only-a.txt"]);
    assert!(folder_listing(&browser_b, "").is_empty());
    assert!(temp_a.path().join("only-a.txt").is_file());
}
