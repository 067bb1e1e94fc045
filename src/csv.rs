/// Split one CSV line into fields. Quoted fields may contain commas and
/// `""` escapes.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut chars = line.chars().peekable();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes && current.trim().is_empty() => {
                current.clear();
                in_quotes = true;
            }
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_simple() {
        let fields = parse_csv_line("abandon,/əˈbændən/,v,từ bỏ");
        assert_eq!(fields, vec!["abandon", "/əˈbændən/", "v", "từ bỏ"]);
    }

    #[test]
    fn test_parse_csv_with_quotes() {
        let fields = parse_csv_line("\"ability\",\"khả năng\"");
        assert_eq!(fields, vec!["ability", "khả năng"]);
    }

    #[test]
    fn test_parse_csv_with_commas_in_field() {
        let fields = parse_csv_line("accept,\"chấp nhận, đồng ý\",v");
        assert_eq!(fields, vec!["accept", "chấp nhận, đồng ý", "v"]);
    }

    #[test]
    fn test_parse_csv_with_escaped_quotes() {
        let fields = parse_csv_line("\"say \"\"hello\"\"\",greeting");
        assert_eq!(fields, vec!["say \"hello\"", "greeting"]);
    }

    #[test]
    fn test_parse_csv_empty_fields() {
        assert_eq!(parse_csv_line(","), vec!["", ""]);
        assert_eq!(parse_csv_line(""), vec![""]);
    }

    #[test]
    fn test_parse_csv_trailing_empty_field() {
        let fields = parse_csv_line("a,b,");
        assert_eq!(fields, vec!["a", "b", ""]);
    }

    #[test]
    fn test_parse_csv_quote_inside_unquoted_field() {
        let fields = parse_csv_line("it's \"fine\",ok");
        assert_eq!(fields, vec!["it's \"fine\"", "ok"]);
    }
}
