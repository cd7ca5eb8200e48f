/// Универсальные утилиты для работы со списками (сортировка, индикаторы заголовков)
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Сортирует список по указанному полю
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Numeric-aware string comparison: digit runs compare by value,
/// everything else case-insensitively. `"2" < "10"`, `"A2" < "a10"`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ai = a.chars().peekable();
    let mut bi = b.chars().peekable();

    loop {
        match (ai.peek().copied(), bi.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let na = take_digits(&mut ai);
                let nb = take_digits(&mut bi);
                let ord = compare_digit_runs(&na, &nb);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                let ord = x.to_lowercase().cmp(y.to_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                ai.next();
                bi.next();
            }
        }
    }
}

fn take_digits(it: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = it.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        it.next();
    }
    run
}

/// Compare two runs of ASCII digits by numeric value without parsing,
/// so arbitrarily long numbers work.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class for the indicator span of a sortable header
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order_of_room_numbers() {
        let mut rooms = vec!["2", "10", "1"];
        rooms.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(rooms, vec!["1", "2", "10"]);
    }

    #[test]
    fn test_natural_order_mixed() {
        let mut v = vec!["B12", "a101", "A2", "101", "12a", "12", "007"];
        v.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(v, vec!["007", "12", "12a", "101", "A2", "a101", "B12"]);
    }

    #[test]
    fn test_equal_value_different_text_is_stable_total_order() {
        assert_eq!(natural_cmp("01", "1"), "01".cmp("1"));
        assert_eq!(natural_cmp("x", "x"), Ordering::Equal);
        assert_eq!(natural_cmp("", "1"), Ordering::Less);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("price", "price", true), " ▲");
        assert_eq!(get_sort_indicator("price", "price", false), " ▼");
        assert_eq!(get_sort_indicator("price", "type", true), " ⇅");
    }
}
