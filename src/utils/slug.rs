/// Lowercase, hyphen-separated, ASCII-only form of `name`.
///
/// Runs of anything that is not an ASCII letter or digit collapse into one
/// separator; `@` reads as "at" and `&` as "and". Common Latin accents are
/// folded to their base letter.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.chars() {
        match ch {
            'a'..='z' | '0'..='9' => {
                let mut buf = [0u8; 4];
                push_word(&mut slug, ch.encode_utf8(&mut buf), &mut pending_dash);
            }
            'A'..='Z' => {
                let lower = ch.to_ascii_lowercase();
                let mut buf = [0u8; 4];
                push_word(&mut slug, lower.encode_utf8(&mut buf), &mut pending_dash);
            }
            '@' => {
                pending_dash = true;
                push_word(&mut slug, "at", &mut pending_dash);
                pending_dash = true;
            }
            '&' => {
                pending_dash = true;
                push_word(&mut slug, "and", &mut pending_dash);
                pending_dash = true;
            }
            '\'' | '\u{2019}' => {}
            other => match fold_accent(other) {
                Some(base) => push_word(&mut slug, base, &mut pending_dash),
                None => pending_dash = true,
            },
        }
    }

    slug
}

fn push_word(slug: &mut String, word: &str, pending_dash: &mut bool) {
    if *pending_dash && !slug.is_empty() {
        slug.push('-');
    }
    *pending_dash = false;
    slug.push_str(word);
}

fn fold_accent(ch: char) -> Option<&'static str> {
    let folded = match ch.to_lowercase().next().unwrap_or(ch) {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => "a",
        'æ' => "ae",
        'ç' | 'ć' | 'č' => "c",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'ı' => "i",
        'ñ' | 'ń' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => "o",
        'œ' => "oe",
        'ß' => "ss",
        'ş' | 'ś' | 'š' => "s",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' => "u",
        'ý' | 'ÿ' => "y",
        'ž' | 'ź' | 'ż' => "z",
        'ğ' => "g",
        'ł' => "l",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn hyphenates_and_lowercases() {
        assert_eq!(
            slugify("Premium Silk Hijab - Midnight Blue"),
            "premium-silk-hijab-midnight-blue"
        );
        assert_eq!(slugify("Under Cap Set - 3 Colors"), "under-cap-set-3-colors");
    }

    #[test]
    fn trims_separators_at_the_edges() {
        assert_eq!(slugify("  --Bucket Hat!!  "), "bucket-hat");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn spells_out_symbols() {
        assert_eq!(slugify("Pins & Clips"), "pins-and-clips");
        assert_eq!(slugify("hat@home"), "hat-at-home");
    }

    #[test]
    fn folds_accents_and_drops_apostrophes() {
        assert_eq!(slugify("Béret Élégant"), "beret-elegant");
        assert_eq!(slugify("Women's Caps"), "womens-caps");
    }
}
