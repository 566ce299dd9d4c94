//! Static page content, one typed record per [`Language`].
//!
//! Both records share one shape: the slide list is a fixed-size array, so the
//! carousel length can never differ between languages. Item lists are slices;
//! their lengths are checked by the tests below.

use crate::core::language::Language;

/// Number of carousel slides in every language.
pub const SLIDE_COUNT: usize = 3;

#[derive(Debug, PartialEq, Eq)]
pub struct Catalog {
    pub header: HeaderText,
    pub hero: HeroText,
    pub categories: Categories,
    pub carousel: [Slide; SLIDE_COUNT],
    pub footer: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct HeaderText {
    pub title: &'static str,
    pub cart: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct HeroText {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, PartialEq, Eq)]
pub struct Categories {
    pub fruits: Category,
    pub vegetables: Category,
    pub grains: Category,
    /// Call-to-action shared by every category card.
    pub shop_now: &'static str,
}

impl Categories {
    pub fn get(&self, kind: CategoryKind) -> &Category {
        match kind {
            CategoryKind::Fruits => &self.fruits,
            CategoryKind::Vegetables => &self.vegetables,
            CategoryKind::Grains => &self.grains,
        }
    }
}

/// The three product groups, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Fruits,
    Vegetables,
    Grains,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 3] = [
        CategoryKind::Fruits,
        CategoryKind::Vegetables,
        CategoryKind::Grains,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            CategoryKind::Fruits => "fruits",
            CategoryKind::Vegetables => "vegetables",
            CategoryKind::Grains => "grains",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Slide {
    pub caption: &'static str,
    /// Accessibility description of the slide image.
    pub alt: &'static str,
}

pub fn catalog(lang: Language) -> &'static Catalog {
    match lang {
        Language::English => &ENGLISH,
        Language::Hindi => &HINDI,
    }
}

static ENGLISH: Catalog = Catalog {
    header: HeaderText {
        title: "Farmer Direct Market",
        cart: "Cart",
    },
    hero: HeroText {
        title: "Connect Directly with Local Farmers",
        description: "Fresh, locally sourced agricultural products delivered straight from farm to your table. Support local farmers and enjoy the freshest produce.",
    },
    categories: Categories {
        fruits: Category {
            name: "Fresh Fruits",
            items: &["Apples", "Bananas", "Oranges", "Strawberries", "Mangoes"],
        },
        vegetables: Category {
            name: "Fresh Vegetables",
            items: &["Tomatoes", "Carrots", "Spinach", "Peppers", "Broccoli"],
        },
        grains: Category {
            name: "Grains & Cereals",
            items: &["Wheat", "Rice", "Corn", "Oats", "Barley"],
        },
        shop_now: "Shop Now",
    },
    carousel: [
        Slide {
            caption: "Supporting Local Farmers",
            alt: "Farmer working in lush green field",
        },
        Slide {
            caption: "Farm-Fresh Produce",
            alt: "Fresh organic vegetables harvest",
        },
        Slide {
            caption: "Community-Driven Agriculture",
            alt: "Farmers working together",
        },
    ],
    footer: "© 2024 Farmer Direct Market. Supporting Local Agriculture.",
};

static HINDI: Catalog = Catalog {
    header: HeaderText {
        title: "किसान प्रत्यक्ष बाजार",
        cart: "कार्ट",
    },
    hero: HeroText {
        title: "स्थानीय किसानों से सीधे जुड़ें",
        description: "ताजा, स्थानीय रूप से उगाई गई कृषि उत्पाद सीधे खेत से आपकी मेज पर। स्थानीय किसानों का समर्थन करें और ताजा उत्पाद का आनंद लें।",
    },
    categories: Categories {
        fruits: Category {
            name: "ताजा फल",
            items: &["सेब", "केला", "संतरा", "स्ट्रॉबेरी", "आम"],
        },
        vegetables: Category {
            name: "ताजा सब्जियां",
            items: &["टमाटर", "गाजर", "पालक", "शिमला मिर्च", "ब्रोकोली"],
        },
        grains: Category {
            name: "अनाज और अनाज",
            items: &["गेहूं", "चावल", "मक्का", "ओट्स", "जौ"],
        },
        shop_now: "अभी खरीदें",
    },
    carousel: [
        Slide {
            caption: "स्थानीय किसानों का समर्थन",
            alt: "हरे-भरे खेत में काम करते किसान",
        },
        Slide {
            caption: "खेत से ताजा उत्पाद",
            alt: "ताजा जैविक सब्जियों की फसल",
        },
        Slide {
            caption: "समुदाय-संचालित कृषि",
            alt: "एक साथ काम करते किसान",
        },
    ],
    footer: "© 2024 किसान प्रत्यक्ष बाजार. स्थानीय कृषि का समर्थन.",
};

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_fields(c: &Catalog) -> Vec<&'static str> {
        let mut fields = vec![
            c.header.title,
            c.header.cart,
            c.hero.title,
            c.hero.description,
            c.categories.shop_now,
            c.footer,
        ];
        for kind in CategoryKind::ALL {
            let category = c.categories.get(kind);
            fields.push(category.name);
            fields.extend(category.items.iter().copied());
        }
        for slide in &c.carousel {
            fields.push(slide.caption);
            fields.push(slide.alt);
        }
        fields
    }

    #[test]
    fn every_rendered_field_is_non_empty() {
        for lang in Language::ALL {
            for field in rendered_fields(catalog(lang)) {
                assert!(!field.trim().is_empty(), "empty field in {lang:?}");
            }
        }
    }

    #[test]
    fn languages_share_one_shape() {
        let en = catalog(Language::English);
        let hi = catalog(Language::Hindi);
        for kind in CategoryKind::ALL {
            assert_eq!(
                en.categories.get(kind).items.len(),
                hi.categories.get(kind).items.len(),
                "item count differs for {}",
                kind.slug()
            );
        }
        assert_eq!(rendered_fields(en).len(), rendered_fields(hi).len());
    }

    #[test]
    fn languages_differ_in_content() {
        let en = catalog(Language::English);
        let hi = catalog(Language::Hindi);
        assert_ne!(en.header.title, hi.header.title);
        assert_ne!(en.carousel[0].caption, hi.carousel[0].caption);
    }

    #[test]
    fn category_lookup_matches_fields() {
        let en = catalog(Language::English);
        assert_eq!(en.categories.get(CategoryKind::Fruits).name, "Fresh Fruits");
        assert_eq!(en.categories.get(CategoryKind::Grains).items[1], "Rice");
    }
}
