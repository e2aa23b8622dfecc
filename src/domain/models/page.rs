// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 每页固定条数
pub const PER_PAGE: u32 = 10;

/// 分页窗口
///
/// 由请求页码推导出发送给引擎的 `from`/`size`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 当前页码，从1开始
    pub current_page: u32,
    /// 每页条数
    pub per_page: u32,
}

impl PageWindow {
    /// 根据可选页码创建分页窗口
    ///
    /// 页码缺失或小于等于1时取第一页
    pub fn new(page: Option<i64>) -> Self {
        let current_page = match page {
            Some(p) if p > 1 => u32::try_from(p).unwrap_or(u32::MAX),
            _ => 1,
        };
        Self {
            current_page,
            per_page: PER_PAGE,
        }
    }

    /// 第一页
    pub fn first() -> Self {
        Self::new(None)
    }

    /// 引擎偏移量
    pub fn from(&self) -> u64 {
        u64::from(self.current_page - 1) * u64::from(self.per_page)
    }

    /// 引擎返回条数
    pub fn size(&self) -> u64 {
        u64::from(self.per_page)
    }
}

/// 总页数，向上取整
pub fn total_pages(total: u64, per_page: u32) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(u64::from(per_page))
}
