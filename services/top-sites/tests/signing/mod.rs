mod scenario;

use ats_core::time::{parse_iso8601, DateTime};
use ats_top_sites::{Credential, RequestSigner, ATS_SERVICE_NAME, ATS_SERVICE_REGION};

/// The instant every signing test is pinned to.
pub fn test_time() -> DateTime {
    parse_iso8601("20150830T123600Z").expect("time must be valid")
}

pub fn test_signer() -> RequestSigner {
    RequestSigner::new(ATS_SERVICE_NAME, ATS_SERVICE_REGION).with_time(test_time())
}

pub fn test_credential() -> Credential {
    Credential::new("AKIDEXAMPLE", "secret")
}
