//! 问题模板目录
//!
//! 按品类组织的固定问题模板，进程启动时初始化，之后只读。

use once_cell::sync::Lazy;

/// 未命中任何品类时使用的兜底品类
pub const FALLBACK_CATEGORY: &str = "food-beverage";

/// 单个品类的模板分组
#[derive(Debug, Clone, Copy)]
pub struct CategoryTemplates {
    /// 品类标识
    pub id: &'static str,
    /// 展示名称
    pub label: &'static str,
    /// 有序模板列表，靠前的先被选用
    pub templates: &'static [&'static str],
}

const CATEGORIES: &[CategoryTemplates] = &[
    CategoryTemplates {
        id: "food-beverage",
        label: "Food & Beverage",
        templates: &[
            "What are the main ingredients and their sources?",
            "Are there any allergens, additives, or preservatives?",
            "What are the nutritional benefits and health impacts?",
            "How is this product packaged and what materials are used?",
            "What certifications (organic, non-GMO, etc.) does this product have?",
        ],
    },
    CategoryTemplates {
        id: "fashion-apparel",
        label: "Fashion & Apparel",
        templates: &[
            "What materials and fabrics are used in this product?",
            "Where and how is this product manufactured?",
            "What are the care instructions and expected durability?",
            "Are there any ethical or sustainable production practices?",
            "What sizing information and fit details should consumers know?",
        ],
    },
    CategoryTemplates {
        id: "health-wellness",
        label: "Health & Wellness",
        templates: &[
            "What are the active ingredients and their therapeutic benefits?",
            "Are there any side effects, contraindications, or warnings?",
            "How should this product be used for optimal results?",
            "What clinical studies or testing support this product's claims?",
            "Is this product suitable for all age groups and conditions?",
        ],
    },
    CategoryTemplates {
        id: "electronics",
        label: "Electronics",
        templates: &[
            "What are the technical specifications and performance capabilities?",
            "What is the battery life and charging/power requirements?",
            "What warranty, support, and service options are available?",
            "What are the environmental considerations for disposal and recycling?",
            "What accessories or additional components are needed?",
        ],
    },
    CategoryTemplates {
        id: "home-living",
        label: "Home & Living",
        templates: &[
            "What materials are used in construction and finish?",
            "What are the care, maintenance, and cleaning requirements?",
            "What are the dimensions, space requirements, and installation needs?",
            "What safety considerations and certifications should users know?",
            "What is the expected durability, lifespan, and warranty coverage?",
        ],
    },
];

/// 全局模板目录
static CATALOG: Lazy<TemplateCatalog> =
    Lazy::new(|| TemplateCatalog::new(CATEGORIES, FALLBACK_CATEGORY));

/// 获取全局模板目录
pub fn catalog() -> &'static TemplateCatalog {
    &CATALOG
}

/// 模板目录
///
/// 查找未知品类时不会报错，而是返回兜底品类的模板。
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    categories: &'static [CategoryTemplates],
    fallback: &'static CategoryTemplates,
}

impl TemplateCatalog {
    /// 创建模板目录
    ///
    /// `fallback` 必须是 `categories` 中的一个品类；找不到时退回第一个品类
    /// （debug 构建下直接断言失败）。`categories` 不能为空。
    pub(crate) fn new(categories: &'static [CategoryTemplates], fallback: &str) -> Self {
        assert!(!categories.is_empty(), "模板目录不能为空");
        let found = categories.iter().find(|c| c.id == fallback);
        debug_assert!(found.is_some(), "兜底品类 {} 不在目录中", fallback);
        let fallback = found.unwrap_or(&categories[0]);
        Self {
            categories,
            fallback,
        }
    }

    /// 查找品类模板，未命中时返回兜底品类
    pub fn lookup(&self, category: &str) -> &'static [&'static str] {
        self.find(category).unwrap_or(self.fallback).templates
    }

    /// 是否包含该品类
    pub fn contains(&self, category: &str) -> bool {
        self.find(category).is_some()
    }

    /// 所有品类（按目录顺序）
    pub fn categories(&self) -> &'static [CategoryTemplates] {
        self.categories
    }

    /// 兜底品类标识
    pub fn fallback_key(&self) -> &'static str {
        self.fallback.id
    }

    fn find(&self, category: &str) -> Option<&'static CategoryTemplates> {
        self.categories.iter().find(|c| c.id == category)
    }
}
