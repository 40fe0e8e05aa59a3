/// Greedy word wrap of a bar label into lines of at most `max_chars` characters.
///
/// `max_chars == 0` disables wrapping. Words longer than the limit are
/// hard-split; full chunks become lines of their own and a shorter tail seeds
/// the next line. Lengths count `char`s, not bytes.
pub fn wrap_label(label: &str, max_chars: usize) -> Vec<String> {
    if max_chars == 0 {
        return vec![label.to_string()];
    }

    let mut lines = Vec::new();
    let mut line = String::new();

    for word in label.split_whitespace() {
        let word_len = word.chars().count();
        let candidate_len = if line.is_empty() {
            word_len
        } else {
            line.chars().count() + 1 + word_len
        };

        if candidate_len <= max_chars {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }

        if word_len > max_chars {
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(max_chars) {
                let part: String = chunk.iter().collect();
                if chunk.len() == max_chars {
                    lines.push(part);
                } else {
                    line = part;
                }
            }
        } else {
            line = word.to_string();
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_returns_label_verbatim() {
        assert_eq!(wrap_label("Hair  and Scalp", 0), vec!["Hair  and Scalp"]);
        assert_eq!(wrap_label("", 0), vec![""]);
    }

    #[test]
    fn greedy_fill_keeps_words_whole() {
        let lines = wrap_label("must refer the client to a physician", 10);
        assert_eq!(lines, vec!["must refer", "the client", "to a", "physician"]);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
    }

    #[test]
    fn long_word_splits_into_fixed_chunks() {
        let lines = wrap_label("disinfectant", 5);
        assert_eq!(lines, vec!["disin", "fecta", "nt"]);

        let label = "x".repeat(23);
        let lines = wrap_label(&label, 4);
        assert_eq!(lines.len(), 23usize.div_ceil(4));
        assert!(lines[..lines.len() - 1].iter().all(|l| l.len() == 4));
    }

    #[test]
    fn partial_chunk_seeds_next_line() {
        assert_eq!(wrap_label("abcdef x", 4), vec!["abcd", "ef x"]);
        assert_eq!(wrap_label("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn exact_multiple_does_not_repeat_previous_line() {
        assert_eq!(wrap_label("ab abcdefgh", 4), vec!["ab", "abcd", "efgh"]);
        assert_eq!(wrap_label("ab abcdefgh cd", 4), vec!["ab", "abcd", "efgh", "cd"]);
    }

    #[test]
    fn whitespace_runs_collapse_and_blank_labels_wrap_to_nothing() {
        assert_eq!(wrap_label("a   b", 10), vec!["a b"]);
        assert!(wrap_label("   ", 3).is_empty());
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(wrap_label("ñandú ñandú", 5), vec!["ñandú", "ñandú"]);
    }
}
