use creative_dom::UserAgent;

const CHROME_MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const FIREFOX: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";
const IE11: &str = "Mozilla/5.0 (Windows NT 10.0; Trident/7.0; rv:11.0) like Gecko";
const IE10: &str = "Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.2; Trident/6.0)";
const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
const ANDROID: &str = "Mozilla/5.0 (Linux; android 14; Pixel 8) AppleWebKit/537.36";

#[test]
fn test_chromium_needs_google_vendor() {
    assert!(UserAgent::new(CHROME_MAC).vendor("Google Inc.").is_chromium());
    assert!(!UserAgent::new(CHROME_MAC).is_chromium());
    assert!(!UserAgent::new(FIREFOX).vendor("Google Inc.").is_chromium());
}

#[test]
fn test_firefox() {
    assert!(UserAgent::new(FIREFOX).is_firefox());
    assert!(!UserAgent::new(CHROME_MAC).is_firefox());
}

#[test]
fn test_legacy_ie() {
    assert!(UserAgent::new(IE11).is_legacy_ie());
    assert!(UserAgent::new(IE10).is_legacy_ie());
    assert!(!UserAgent::new(FIREFOX).is_legacy_ie());
}

#[test]
fn test_safari_vendor() {
    assert!(UserAgent::new(IPHONE).vendor("Apple Computer, Inc.").is_safari_vendor());
    assert!(!UserAgent::new(IPHONE).vendor("Google Inc.").is_safari_vendor());
}

#[test]
fn test_mac_platform_reads_app_version() {
    let ua = UserAgent::new(CHROME_MAC).app_version("5.0 (Macintosh; Intel Mac OS X 10_15_7)");
    assert!(ua.is_mac_platform());
    assert!(!UserAgent::new(CHROME_MAC).is_mac_platform());
}

#[test]
fn test_mobile_device() {
    assert!(UserAgent::new(IPHONE).is_mobile_device());
    assert!(UserAgent::new(ANDROID).is_mobile_device());
    assert!(!UserAgent::new(CHROME_MAC).is_mobile_device());
    assert!(!UserAgent::new(IE11).is_mobile_device());
}
