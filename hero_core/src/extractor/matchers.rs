//! Individual field matchers. Each one scans the whole text and returns the
//! first capture, verbatim.

use regex::Regex;
use std::sync::LazyLock;

/// Keywords that end a profession phrase. The keyword itself is not captured.
pub const PROFESSION_KEYWORDS: [&str; 6] = ["勇者", "战士", "法师", "盗贼", "弓箭手", "骑士"];

// Letters are CJK unified ideographs U+4E00..=U+9FA5 or ASCII letters.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"我叫([\x{4E00}-\x{9FA5}a-zA-Z]+)").expect("valid regex"));
static GENDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(男|女)勇者").expect("valid regex"));
static PROFESSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"我是([\x{{4E00}}-\x{{9FA5}}a-zA-Z]+)({})",
        PROFESSION_KEYWORDS.join("|")
    );
    Regex::new(&pattern).expect("valid regex")
});
static AGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)岁").expect("valid regex"));

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// "我叫<letters>" -> the letters.
pub fn match_name(text: &str) -> Option<String> {
    first_capture(&NAME_RE, text)
}

/// "男勇者" / "女勇者" -> "男" / "女".
pub fn match_gender(text: &str) -> Option<String> {
    first_capture(&GENDER_RE, text)
}

/// "我是<letters><keyword>" -> the letters.
///
/// Matching is greedy with backtracking, so in "我是魔法师法师" the letters run
/// is "魔法师" and the trailing "法师" is the keyword.
pub fn match_profession(text: &str) -> Option<String> {
    first_capture(&PROFESSION_RE, text)
}

/// "<digits>岁" -> the number. Digits that overflow are a miss.
pub fn match_age(text: &str) -> Option<u32> {
    first_capture(&AGE_RE, text).and_then(|digits| digits.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_name() {
        assert_eq!(match_name("我叫小明，今年20岁"), Some("小明".to_string()));
        assert_eq!(match_name("大家好我叫Alice"), Some("Alice".to_string()));
        assert_eq!(match_name("我叫 小明"), None);
        assert_eq!(match_name("名叫艾伦"), None);
    }

    #[test]
    fn test_match_gender() {
        assert_eq!(match_gender("我是一名女勇者"), Some("女".to_string()));
        assert_eq!(match_gender("男勇者出发了"), Some("男".to_string()));
        assert_eq!(match_gender("是个男性"), None);
    }

    #[test]
    fn test_match_profession_strips_keyword() {
        assert_eq!(match_profession("我是魔法师法师"), Some("魔法师".to_string()));
        assert_eq!(match_profession("我是暗影盗贼"), Some("暗影".to_string()));
        assert_eq!(match_profession("我是精灵弓箭手。"), Some("精灵".to_string()));
        assert_eq!(match_profession("我是一个勇者"), Some("一个".to_string()));
    }

    #[test]
    fn test_match_profession_needs_letters_before_keyword() {
        assert_eq!(match_profession("我是勇者"), None);
        assert_eq!(match_profession("我是厨师"), None);
    }

    #[test]
    fn test_match_age() {
        assert_eq!(match_age("今年25岁了"), Some(25));
        assert_eq!(match_age("0岁"), Some(0));
        assert_eq!(match_age("二十岁"), None);
        assert_eq!(match_age("99999999999岁"), None);
    }
}
