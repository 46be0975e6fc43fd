//! Running header detection.
//!
//! Text extracted from paginated documents often repeats the same first line
//! on every page (a journal name, a chapter title). Such a line is detected
//! across pages and removed before classification so it does not show up as
//! a title or paragraph on each page.

/// Minimum length, in characters, a shared first-line prefix must exceed to
/// count as a running header.
pub const MIN_HEADER_PREFIX: usize = 20;

/// Detect a running header shared by the first lines of `pages`.
///
/// The first line of each page is trimmed. If the longest common prefix of
/// those lines is longer than [`MIN_HEADER_PREFIX`] characters it is the
/// header; otherwise the header is the first line when every page starts
/// with the same line. Fewer than two pages, or an empty candidate, yield
/// `None`.
pub fn detect_running_header<S: AsRef<str>>(pages: &[S]) -> Option<String> {
    if pages.len() < 2 {
        return None;
    }

    let first_lines: Vec<&str> = pages.iter().map(|p| first_line(p.as_ref())).collect();

    let prefix = common_prefix(&first_lines);
    let header = if prefix.chars().count() > MIN_HEADER_PREFIX {
        prefix
    } else if first_lines.iter().all(|line| *line == first_lines[0]) {
        first_lines[0]
    } else {
        return None;
    };

    if header.is_empty() {
        None
    } else {
        Some(header.to_string())
    }
}

/// Remove the running header from every page that starts with it.
///
/// Only pages whose trimmed first line equals the header lose that line;
/// the rest are returned unchanged.
pub fn strip_running_header<S: AsRef<str>>(pages: &[S]) -> Vec<String> {
    let Some(header) = detect_running_header(pages) else {
        return pages.iter().map(|p| p.as_ref().to_string()).collect();
    };

    log::debug!("Detected running header: {:?}", header);

    pages
        .iter()
        .map(|page| {
            let page = page.as_ref();
            if first_line(page) == header {
                match page.split_once('\n') {
                    Some((_, rest)) => rest.to_string(),
                    None => String::new(),
                }
            } else {
                page.to_string()
            }
        })
        .collect()
}

fn first_line(page: &str) -> &str {
    page.split('\n').next().unwrap_or_default().trim()
}

/// Longest character-wise prefix shared by all lines.
fn common_prefix<'a>(lines: &[&'a str]) -> &'a str {
    let Some((first, rest)) = lines.split_first() else {
        return "";
    };

    let mut end = first.len();
    for line in rest {
        let shared: usize = first
            .chars()
            .zip(line.chars())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a.len_utf8())
            .sum();
        end = end.min(shared);
    }
    &first[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_first_lines() {
        let pages = [
            "Revista X\nConteúdo A",
            "Revista X\nConteúdo B",
            "Revista X\nConteúdo C",
        ];
        assert_eq!(detect_running_header(&pages), Some("Revista X".to_string()));
        assert_eq!(
            strip_running_header(&pages),
            vec!["Conteúdo A", "Conteúdo B", "Conteúdo C"]
        );
    }

    #[test]
    fn test_long_common_prefix() {
        let pages = [
            "Relatório Anual de Atividades - página 1\nTexto um",
            "Relatório Anual de Atividades - página 2\nTexto dois",
        ];
        let header = detect_running_header(&pages).unwrap();
        assert_eq!(header, "Relatório Anual de Atividades - página ");

        // The prefix is not a whole first line, so nothing is removed.
        assert_eq!(
            strip_running_header(&pages),
            pages.iter().map(|p| p.to_string()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_prefix_match_removes_exact_lines_only() {
        let pages = [
            "Boletim Informativo Municipal\nPrimeira",
            "Boletim Informativo Municipal - extra\nSegunda",
            "Boletim Informativo Municipal\nTerceira",
        ];
        let stripped = strip_running_header(&pages);
        assert_eq!(stripped[0], "Primeira");
        assert_eq!(stripped[1], pages[1]);
        assert_eq!(stripped[2], "Terceira");
    }

    #[test]
    fn test_short_prefix_is_not_a_header() {
        let pages = ["Capítulo um\nA", "Capítulo dois\nB"];
        assert_eq!(detect_running_header(&pages), None);
        assert_eq!(strip_running_header(&pages), vec![pages[0], pages[1]]);
    }

    #[test]
    fn test_single_page_unchanged() {
        let pages = ["Cabeçalho\nTexto"];
        assert_eq!(detect_running_header(&pages), None);
        assert_eq!(strip_running_header(&pages), vec!["Cabeçalho\nTexto"]);
    }

    #[test]
    fn test_empty_header_is_ignored() {
        let pages = ["\nTexto A", "   \nTexto B"];
        assert_eq!(detect_running_header(&pages), None);
        assert_eq!(strip_running_header(&pages), vec![pages[0], pages[1]]);
    }

    #[test]
    fn test_page_with_only_header() {
        let pages = ["  Jornal  ", "Jornal\nNotícia"];
        assert_eq!(strip_running_header(&pages), vec!["", "Notícia"]);
    }

    #[test]
    fn test_common_prefix_multibyte() {
        assert_eq!(common_prefix(&["ação", "açúcar"]), "aç");
        assert_eq!(common_prefix(&[]), "");
    }
}
