/// Declare a `SuffixRule`.
///
/// ```text
/// suffix_rule!("ns", 1, "m")
/// suffix_rule!("ães", 1, "ão", except: ["mãe"])
/// ```
macro_rules! suffix_rule {
    ($suffix:literal, $min:literal, $replacement:literal $(,)?) => {
        $crate::SuffixRule { suffix: $suffix, min_stem_length: $min, replacement: $replacement, exceptions: &[] }
    };
    (
        $suffix:literal, $min:literal, $replacement:literal,
        except: [ $($exception:literal),* $(,)? ]
        $(,)?
    ) => {
        $crate::SuffixRule {
            suffix: $suffix,
            min_stem_length: $min,
            replacement: $replacement,
            exceptions: &[ $($exception),* ],
        }
    };
}
