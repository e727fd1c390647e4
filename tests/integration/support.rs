use rootbrowse::{Browser, RootContext};
use tempfile::TempDir;

/// Empty temporary root plus a browser over it.
pub fn empty_root() -> (TempDir, Browser) {
    let temp = TempDir::new().unwrap();
    let browser = Browser::new(RootContext::new(temp.path()).unwrap());
    (temp, browser)
}

pub fn folder_listing(browser: &Browser, path: &str) -> Vec<String> {
    match browser.browse(path).unwrap() {
        rootbrowse::Entry::Folder { mut listing } => {
            listing.sort();
            listing
        }
        other => panic!("expected folder at {:?}, got {:?}", path, other),
    }
}
