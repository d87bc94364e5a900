use serde::{Deserialize, Serialize};

/// Response wrapper carrying page metadata alongside a result slice.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PagedOutput<T> {
    pub page_number: u32,
    pub page_size: u32,
    pub total_number_of_pages: u32,
    pub total_number_of_records: usize,
    pub results: Vec<T>,
}

impl<T> PagedOutput<T> {
    /// Slices the full result set down to the requested page.
    ///
    /// Callers must validate `page_number >= 1` and `page_size >= 1` first;
    /// a page past the end yields an empty result, not an error.
    pub fn paginate(records: Vec<T>, page_number: u32, page_size: u32) -> Self {
        let total_number_of_records = records.len();
        let total_number_of_pages =
            (total_number_of_records as u64).div_ceil(page_size as u64) as u32;

        let offset = (page_number as u64 - 1) * page_size as u64;
        let results = records
            .into_iter()
            .skip(offset as usize)
            .take(page_size as usize)
            .collect();

        PagedOutput {
            page_number,
            page_size,
            total_number_of_pages,
            total_number_of_records,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_page_returns_expected_slice() {
        let records: Vec<i32> = (1..=25).collect();

        let page = PagedOutput::paginate(records, 2, 10);

        assert_eq!(page.page_number, 2);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total_number_of_pages, 3);
        assert_eq!(page.total_number_of_records, 25);
        assert_eq!(page.results, (11..=20).collect::<Vec<i32>>());
    }

    #[test]
    fn last_page_is_short() {
        let records: Vec<i32> = (1..=25).collect();

        let page = PagedOutput::paginate(records, 3, 10);

        assert_eq!(page.results, (21..=25).collect::<Vec<i32>>());
        assert_eq!(page.total_number_of_pages, 3);
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let records: Vec<i32> = (1..=25).collect();

        let page = PagedOutput::paginate(records, 7, 10);

        assert!(page.results.is_empty());
        assert_eq!(page.total_number_of_records, 25);
    }

    #[test]
    fn empty_result_set_has_zero_pages() {
        let page = PagedOutput::paginate(Vec::<i32>::new(), 1, 10);

        assert_eq!(page.total_number_of_pages, 0);
        assert_eq!(page.total_number_of_records, 0);
        assert!(page.results.is_empty());
    }

    #[test]
    fn exact_multiple_does_not_add_a_trailing_page() {
        let records: Vec<i32> = (1..=30).collect();

        let page = PagedOutput::paginate(records, 1, 10);

        assert_eq!(page.total_number_of_pages, 3);
        assert_eq!(page.results.len(), 10);
    }

    #[test]
    fn slice_length_matches_clamped_remainder() {
        for (total, page_number, page_size, expected_len) in
            [(25, 1, 10, 10), (25, 3, 10, 5), (5, 2, 10, 0), (1, 1, 1, 1)]
        {
            let records: Vec<i32> = (1..=total).collect();
            let page = PagedOutput::paginate(records, page_number, page_size);
            assert_eq!(page.results.len(), expected_len, "total={}", total);
        }
    }
}
