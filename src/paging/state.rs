//! 已加载页面的快照
//!
//! 宿主在失效时把它交给分页源，分页源据此计算刷新 key。

use super::types::{Page, PagingConfig};

/// 已加载页面的只读快照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingState<K, V> {
    pub pages: Vec<Page<K, V>>,
    /// 用户最后停留的位置（包含前置占位符）
    pub anchor_position: Option<usize>,
    pub config: PagingConfig,
    pub leading_placeholder_count: usize,
}

impl<K, V> PagingState<K, V> {
    pub fn new(
        pages: Vec<Page<K, V>>,
        anchor_position: Option<usize>,
        config: PagingConfig,
        leading_placeholder_count: usize,
    ) -> Self {
        Self {
            pages,
            anchor_position,
            config,
            leading_placeholder_count,
        }
    }

    /// 所有页都为空（含没有任何页）
    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(Page::is_empty)
    }

    pub fn first_item_or_none(&self) -> Option<&V> {
        self.pages.iter().find_map(|page| page.data.first())
    }

    pub fn last_item_or_none(&self) -> Option<&V> {
        self.pages.iter().rev().find_map(|page| page.data.last())
    }

    /// 找到离 `anchor_position` 最近的页
    ///
    /// 位置落在首页之前时返回第一个非空页，落在末页之后时返回最后一个非空页。
    pub fn closest_page_to_position(&self, anchor_position: usize) -> Option<&Page<K, V>> {
        if self.is_empty() {
            return None;
        }

        let (page_index, index) = self.position_to_paged_indices(anchor_position);
        let last_index = self.pages.len() - 1;

        if index < 0 {
            return self.pages.iter().find(|page| !page.is_empty());
        }
        if page_index == last_index && index as usize >= self.pages[last_index].len() {
            return self.pages.iter().rev().find(|page| !page.is_empty());
        }
        self.pages.get(page_index)
    }

    /// 找到离 `anchor_position` 最近的已加载条目
    pub fn closest_item_to_position(&self, anchor_position: usize) -> Option<&V> {
        if self.is_empty() {
            return None;
        }

        let (page_index, index) = self.position_to_paged_indices(anchor_position);
        let last_index = self.pages.len() - 1;

        if index < 0 {
            return self.first_item_or_none();
        }
        if page_index == last_index && index as usize >= self.pages[last_index].len() {
            return self.last_item_or_none();
        }
        self.pages[page_index].data.get(index as usize)
    }

    /// 把绝对位置换算为 (页下标, 页内下标)，页内下标可能为负或越过末页
    fn position_to_paged_indices(&self, anchor_position: usize) -> (usize, isize) {
        let mut page_index = 0;
        let mut index = anchor_position as isize - self.leading_placeholder_count as isize;
        let last_index = self.pages.len().saturating_sub(1);

        while page_index < last_index && index >= self.pages[page_index].len() as isize {
            index -= self.pages[page_index].len() as isize;
            page_index += 1;
        }

        (page_index, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(pages: Vec<Page<i32, u32>>, leading: usize) -> PagingState<i32, u32> {
        PagingState::new(pages, Some(0), PagingConfig::new(2), leading)
    }

    fn three_pages() -> Vec<Page<i32, u32>> {
        vec![
            Page::new(vec![0, 1], None, Some(2)),
            Page::new(vec![2, 3], Some(1), Some(3)),
            Page::new(vec![4], Some(2), None),
        ]
    }

    #[test]
    fn test_closest_page_none_without_pages() {
        let s = state(Vec::new(), 0);
        assert!(s.is_empty());
        assert!(s.closest_page_to_position(0).is_none());
        assert!(s.closest_item_to_position(0).is_none());
    }

    #[test]
    fn test_closest_page_none_when_all_pages_empty() {
        let s = state(vec![Page::empty(), Page::empty()], 0);
        assert!(s.closest_page_to_position(3).is_none());
    }

    #[test]
    fn test_closest_page_inside_range() {
        let s = state(three_pages(), 0);
        assert_eq!(s.closest_page_to_position(0).unwrap().next_key, Some(2));
        assert_eq!(s.closest_page_to_position(1).unwrap().next_key, Some(2));
        assert_eq!(s.closest_page_to_position(2).unwrap().prev_key, Some(1));
        assert_eq!(s.closest_page_to_position(4).unwrap().prev_key, Some(2));
    }

    #[test]
    fn test_closest_page_clamps_past_end() {
        let s = state(three_pages(), 0);
        assert_eq!(s.closest_page_to_position(99).unwrap().prev_key, Some(2));
        assert_eq!(s.closest_item_to_position(99), Some(&4));
    }

    #[test]
    fn test_closest_page_skips_trailing_empty_page() {
        let mut pages = three_pages();
        pages.push(Page::new(Vec::new(), Some(3), None));
        let s = state(pages, 0);
        let page = s.closest_page_to_position(50).unwrap();
        assert_eq!(page.data, vec![4]);
    }

    #[test]
    fn test_closest_page_before_leading_placeholders() {
        let s = state(three_pages(), 10);
        let page = s.closest_page_to_position(3).unwrap();
        assert_eq!(page.data, vec![0, 1]);
        assert_eq!(s.closest_item_to_position(3), Some(&0));
        assert_eq!(s.closest_item_to_position(12), Some(&2));
    }

    #[test]
    fn test_first_and_last_item() {
        let s = state(three_pages(), 0);
        assert_eq!(s.first_item_or_none(), Some(&0));
        assert_eq!(s.last_item_or_none(), Some(&4));
    }
}
