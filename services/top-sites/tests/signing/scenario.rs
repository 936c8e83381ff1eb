use super::{test_credential, test_signer};
use ats_core::hash::{hex_hmac_sha256, hex_sha256};
use ats_top_sites::{
    canonical_request_string, generate_signing_key, Config, RequestSigner, TopSitesQuery,
    ATS_SERVICE_ENDPOINT, ATS_SERVICE_NAME, ATS_SERVICE_REGION, ATS_URI,
};
use pretty_assertions::assert_eq;

#[test]
fn test_end_to_end() {
    let query = TopSitesQuery::new("US", "1", "10");

    let first = test_signer().sign(&test_credential(), &query);
    let second = test_signer().sign(&test_credential(), &query);

    assert_eq!(
        first.query,
        "Action=TopSites&Count=10&CountryCode=US&ResponseGroup=Country&Start=1"
    );
    assert_eq!(first.date_tz, "20150830T123600Z");
    assert_eq!(first.authorization, second.authorization);
}

/// Recompute the signature step by step with the public building blocks.
#[test]
fn test_signature_from_parts() {
    let signed = test_signer().sign(&test_credential(), &TopSitesQuery::new("US", "1", "10"));

    let creq = canonical_request_string(ATS_URI, &signed.query, ATS_SERVICE_ENDPOINT, &signed.date_tz);
    let scope = format!("20150830/{ATS_SERVICE_REGION}/{ATS_SERVICE_NAME}/aws4_request");
    let string_to_sign = format!(
        "AWS4-HMAC-SHA256\n{}\n{scope}\n{}",
        signed.date_tz,
        hex_sha256(creq.as_bytes())
    );
    let key = generate_signing_key("secret", "20150830", ATS_SERVICE_REGION, ATS_SERVICE_NAME);
    let signature = hex_hmac_sha256(&key, string_to_sign.as_bytes());

    assert_eq!(
        signed.authorization,
        format!(
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/{scope}, SignedHeaders=host;x-amz-date, Signature={signature}"
        )
    );
}

#[test]
fn test_date_tz_prefix_matches_scope_date() {
    let signer = RequestSigner::from(&Config::default());
    let signed = signer.sign(&test_credential(), &TopSitesQuery::new("US", "1", "10"));

    let scope_date = signed
        .authorization
        .split("Credential=AKIDEXAMPLE/")
        .nth(1)
        .and_then(|s| s.split('/').next())
        .expect("authorization must carry a scope");
    assert_eq!(&signed.date_tz[..8], scope_date);
}
