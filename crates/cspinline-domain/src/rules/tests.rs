use super::{Rule, ie_family::IeFamily, legacy_webkit::LegacyWebkit};
use crate::criteria::Criteria;
use crate::error::DecisionError;
use crate::model::{ClientContext, ClientFamily};
use crate::test_support::context_for;
use cspinline_types::{InlineScriptMode, ids};

#[test]
fn ie_rule_is_relevant_while_not_yet_unsupported() {
    let context = context_for(ClientFamily::Ie, Some(11));

    let criteria = Criteria::new(&context, InlineScriptMode::Nonce);
    assert!(IeFamily.is_relevant(&criteria));

    let criteria = Criteria::new(&context, InlineScriptMode::UnsafeInline);
    assert!(IeFamily.is_relevant(&criteria));
}

#[test]
fn ie_rule_is_not_relevant_once_unsupported() {
    let context = context_for(ClientFamily::Ie, Some(11));
    let criteria = Criteria::new(&context, InlineScriptMode::Unsupported);
    assert!(!IeFamily.is_relevant(&criteria));
}

#[test]
fn ie_rule_downgrades_ie_client_to_unsupported() {
    let context = context_for(ClientFamily::Ie, Some(11));
    let mut criteria = Criteria::new(&context, InlineScriptMode::Nonce);

    let mut out = Vec::new();
    IeFamily.process(&mut criteria, &mut out).unwrap();

    assert_eq!(criteria.mode(), InlineScriptMode::Unsupported);
    assert_eq!(out.len(), 1);
    let entry = &out[0];
    assert_eq!(entry.rule_id, ids::RULE_CLIENT_IE);
    assert_eq!(entry.code, ids::CODE_IE_DETECTED);
    assert_eq!(entry.mode_before, InlineScriptMode::Nonce);
    assert_eq!(entry.mode_after, InlineScriptMode::Unsupported);
    assert_eq!(entry.data["family"], "ie");
    assert_eq!(entry.data["major_version"], 11);
}

#[test]
fn ie_rule_leaves_non_ie_client_untouched() {
    let context = context_for(ClientFamily::Firefox, Some(131));
    let mut criteria = Criteria::new(&context, InlineScriptMode::Nonce);

    let mut out = Vec::new();
    IeFamily.process(&mut criteria, &mut out).unwrap();

    assert_eq!(criteria.mode(), InlineScriptMode::Nonce);
    assert!(out.is_empty());
}

#[test]
fn ie_rule_fails_on_context_without_client() {
    let context = ClientContext::default();
    let mut criteria = Criteria::new(&context, InlineScriptMode::Nonce);

    let mut out = Vec::new();
    let err = IeFamily.process(&mut criteria, &mut out).unwrap_err();
    assert_eq!(err, DecisionError::MissingClient);
    assert!(out.is_empty());
}

#[test]
fn legacy_webkit_is_only_relevant_in_nonce_mode() {
    let context = context_for(ClientFamily::Webkit, Some(9));

    let criteria = Criteria::new(&context, InlineScriptMode::Nonce);
    assert!(LegacyWebkit.is_relevant(&criteria));

    let criteria = Criteria::new(&context, InlineScriptMode::UnsafeInline);
    assert!(!LegacyWebkit.is_relevant(&criteria));

    let criteria = Criteria::new(&context, InlineScriptMode::Unsupported);
    assert!(!LegacyWebkit.is_relevant(&criteria));
}

#[test]
fn legacy_webkit_downgrades_pre_nonce_safari() {
    let context = context_for(ClientFamily::Webkit, Some(9));
    let mut criteria = Criteria::new(&context, InlineScriptMode::Nonce);

    let mut out = Vec::new();
    LegacyWebkit.process(&mut criteria, &mut out).unwrap();

    assert_eq!(criteria.mode(), InlineScriptMode::UnsafeInline);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].code, ids::CODE_NO_NONCE_SUPPORT);
    assert_eq!(out[0].data["nonce_support_floor"], 10);
}

#[test]
fn legacy_webkit_spares_current_safari() {
    let context = context_for(ClientFamily::Webkit, Some(17));
    let mut criteria = Criteria::new(&context, InlineScriptMode::Nonce);

    let mut out = Vec::new();
    LegacyWebkit.process(&mut criteria, &mut out).unwrap();

    assert_eq!(criteria.mode(), InlineScriptMode::Nonce);
    assert!(out.is_empty());
}

#[test]
fn legacy_webkit_treats_unknown_version_as_current() {
    let context = context_for(ClientFamily::Webkit, None);
    let mut criteria = Criteria::new(&context, InlineScriptMode::Nonce);

    let mut out = Vec::new();
    LegacyWebkit.process(&mut criteria, &mut out).unwrap();

    assert_eq!(criteria.mode(), InlineScriptMode::Nonce);
    assert!(out.is_empty());
}

#[test]
fn legacy_webkit_ignores_non_webkit_families() {
    let context = context_for(ClientFamily::Chromium, Some(5));
    let mut criteria = Criteria::new(&context, InlineScriptMode::Nonce);

    let mut out = Vec::new();
    LegacyWebkit.process(&mut criteria, &mut out).unwrap();

    assert_eq!(criteria.mode(), InlineScriptMode::Nonce);
    assert!(out.is_empty());
}

#[test]
fn is_relevant_never_mutates_criteria() {
    let context = context_for(ClientFamily::Ie, Some(11));
    let criteria = Criteria::new(&context, InlineScriptMode::Nonce);

    let _ = IeFamily.is_relevant(&criteria);
    let _ = LegacyWebkit.is_relevant(&criteria);

    assert_eq!(criteria.mode(), InlineScriptMode::Nonce);
}
