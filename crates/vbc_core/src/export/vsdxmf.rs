//! Target listing writer.
//!
//! One `phoneme,reference,left,preutterance,consonant,right,overlap` line per
//! entry, in emission order.

use crate::convert::TargetEntry;

/// Write target entries to listing format string.
pub fn render_vsdxmf(entries: &[TargetEntry]) -> String {
    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{},{},{}\n",
            entry.phoneme,
            entry.reference,
            entry.timing.render()
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{convert_timing, SampleRef};
    use crate::oto::SourceTiming;

    #[test]
    fn test_render_vsdxmf() {
        let timing = convert_timing(&SourceTiming::new(0.0, 10.0, -5.0, 2.0, 3.0));
        let entries = vec![
            TargetEntry {
                phoneme: "a k".to_string(),
                reference: SampleRef::Original("ak.wav".to_string()),
                timing,
            },
            TargetEntry {
                phoneme: "a2 k".to_string(),
                reference: SampleRef::Reuse("a k".to_string()),
                timing,
            },
        ];

        assert_eq!(
            render_vsdxmf(&entries),
            "a k,ak.wav,0.0,2.0,10.0,5.0,3.0\na2 k,#a k,0.0,2.0,10.0,5.0,3.0\n"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_vsdxmf(&[]), "");
    }
}
