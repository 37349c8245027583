//! Canonical value extraction from answer records.
//!
//! Each supported [`RecordKind`] has one extraction function in
//! [`EXTRACTORS`]. An extractor returns `None` when the answer is not of its
//! kind, which is how a type mismatch is detected.

use crate::config::TxtSegments;
use crate::dns::RawAnswer;
use crate::error_handling::TypeMismatchError;
use crate::records::RecordKind;

type Extractor = fn(&RawAnswer, TxtSegments) -> Option<String>;

static EXTRACTORS: [(RecordKind, Extractor); 5] = [
    (RecordKind::A, extract_a as Extractor),
    (RecordKind::Aaaa, extract_aaaa as Extractor),
    (RecordKind::Ptr, extract_ptr as Extractor),
    (RecordKind::Cname, extract_cname as Extractor),
    (RecordKind::Txt, extract_txt as Extractor),
];

fn extract_a(answer: &RawAnswer, _: TxtSegments) -> Option<String> {
    match answer {
        RawAnswer::A(ip) => Some(ip.to_string()),
        _ => None,
    }
}

fn extract_aaaa(answer: &RawAnswer, _: TxtSegments) -> Option<String> {
    match answer {
        RawAnswer::Aaaa(ip) => Some(ip.to_string()),
        _ => None,
    }
}

fn extract_ptr(answer: &RawAnswer, _: TxtSegments) -> Option<String> {
    match answer {
        RawAnswer::Ptr(target) => Some(target.clone()),
        _ => None,
    }
}

fn extract_cname(answer: &RawAnswer, _: TxtSegments) -> Option<String> {
    match answer {
        RawAnswer::Cname(target) => Some(target.clone()),
        _ => None,
    }
}

fn extract_txt(answer: &RawAnswer, segments: TxtSegments) -> Option<String> {
    match answer {
        RawAnswer::Txt(strings) => Some(match segments {
            TxtSegments::First => strings.first().cloned().unwrap_or_default(),
            TxtSegments::Concatenate => strings.concat(),
        }),
        _ => None,
    }
}

/// Extracts the value of `answer` that is compared against the configured one.
///
/// `name` is the queried name, used only in the error.
///
/// # Errors
///
/// Returns `TypeMismatchError` when `answer` is not an `expected` record.
pub fn extract_value(
    answer: &RawAnswer,
    expected: RecordKind,
    name: &str,
    segments: TxtSegments,
) -> Result<String, TypeMismatchError> {
    EXTRACTORS
        .iter()
        .find(|(kind, _)| *kind == expected)
        .and_then(|(_, extract)| extract(answer, segments))
        .ok_or_else(|| TypeMismatchError {
            name: name.to_string(),
            expected: expected.to_string(),
            actual: answer.type_name(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_resolver::proto::rr::RecordType;
    use std::net::{Ipv4Addr, Ipv6Addr};
    use strum::IntoEnumIterator;

    const NAME: &str = "web.example.com.";

    #[test]
    fn test_every_kind_has_an_extractor() {
        for kind in RecordKind::iter() {
            assert!(
                EXTRACTORS.iter().any(|(k, _)| *k == kind),
                "{kind} has no extractor"
            );
        }
    }

    #[test]
    fn test_address_values() {
        let a = RawAnswer::A(Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(
            extract_value(&a, RecordKind::A, NAME, TxtSegments::First),
            Ok("10.0.0.5".to_string())
        );

        let aaaa = RawAnswer::Aaaa(Ipv6Addr::new(0x2001, 0x0db8, 0, 0, 0, 0, 0, 0x0001));
        assert_eq!(
            extract_value(&aaaa, RecordKind::Aaaa, NAME, TxtSegments::First),
            Ok("2001:db8::1".to_string())
        );
    }

    #[test]
    fn test_name_values_are_returned_as_is() {
        let cname = RawAnswer::Cname("edge.example.net.".to_string());
        assert_eq!(
            extract_value(&cname, RecordKind::Cname, NAME, TxtSegments::First),
            Ok("edge.example.net.".to_string())
        );

        let ptr = RawAnswer::Ptr("Web.Example.com.".to_string());
        assert_eq!(
            extract_value(&ptr, RecordKind::Ptr, NAME, TxtSegments::First),
            Ok("Web.Example.com.".to_string())
        );
    }

    #[test]
    fn test_txt_segments() {
        let txt = RawAnswer::Txt(vec!["v=spf1 ".to_string(), "-all".to_string()]);
        assert_eq!(
            extract_value(&txt, RecordKind::Txt, NAME, TxtSegments::First),
            Ok("v=spf1 ".to_string())
        );
        assert_eq!(
            extract_value(&txt, RecordKind::Txt, NAME, TxtSegments::Concatenate),
            Ok("v=spf1 -all".to_string())
        );

        let empty = RawAnswer::Txt(Vec::new());
        assert_eq!(
            extract_value(&empty, RecordKind::Txt, NAME, TxtSegments::First),
            Ok(String::new())
        );
    }

    #[test]
    fn test_type_mismatch() {
        let a = RawAnswer::A(Ipv4Addr::new(10, 0, 0, 5));
        let err = extract_value(&a, RecordKind::Txt, NAME, TxtSegments::First)
            .expect_err("A is not TXT");
        assert_eq!(
            err,
            TypeMismatchError {
                name: NAME.to_string(),
                expected: "TXT".to_string(),
                actual: "A".to_string(),
            }
        );

        let mx = RawAnswer::Other(RecordType::MX);
        let err = extract_value(&mx, RecordKind::Cname, NAME, TxtSegments::First)
            .expect_err("MX is not CNAME");
        assert_eq!(err.actual, "MX");
    }
}
