//! Static Catalogs
//!
//! Compiled-in mock data for all four features. Read-only after load.

use crate::models::{
    CateringProvider, Challenge, CharityIssue, Product, ProductStyle, ProductType, Story,
    StoryCard, SupportPackage, Surprise,
};

/// Story deck cards, bottom-to-top (the last entry is the top card)
pub fn story_cards() -> Vec<StoryCard> {
    vec![
        StoryCard::Story(Story {
            id: 1,
            organization: "喜樂庇護工場".to_string(),
            title: "小安的第一爐餅乾".to_string(),
            content: "從不敢碰烤箱到獨立完成整爐手工餅乾，小安花了一年。每一份訂單，都是他繼續練習的理由。".to_string(),
            image: "https://picsum.photos/id/431/600/400".to_string(),
        }),
        StoryCard::Surprise(Surprise {
            id: 2,
            title: "驚喜！折扣碼 GOODBITE".to_string(),
            content: "感謝您的支持，結帳時輸入折扣碼可獲得 9 折優惠。".to_string(),
        }),
        StoryCard::Story(Story {
            id: 3,
            organization: "山線偏鄉教育協會".to_string(),
            title: "麵包車開進部落".to_string(),
            content: "協會的烘焙教室每月巡迴三所山區小學，孩子們揉的麵糰，成了返鄉青年的創業起點。".to_string(),
            image: "https://picsum.photos/id/835/600/400".to_string(),
        }),
        StoryCard::Story(Story {
            id: 4,
            organization: "春日婦女發展中心".to_string(),
            title: "二度就業的檸檬塔".to_string(),
            content: "淑芬離開職場十二年後，在中央廚房找回自信。她的檸檬塔是外燴菜單上最快完售的品項。".to_string(),
            image: "https://picsum.photos/id/493/600/400".to_string(),
        }),
        StoryCard::Surprise(Surprise {
            id: 5,
            title: "驚喜！隱藏故事".to_string(),
            content: "下週將上架三個全新的公益故事，敬請期待。".to_string(),
        }),
        StoryCard::Story(Story {
            id: 6,
            organization: "喜樂庇護工場".to_string(),
            title: "包裝線上的默契".to_string(),
            content: "禮盒包裝是工場裡最需要合作的工序。四位夥伴一條線，一天能送出兩百份心意。".to_string(),
            image: "https://picsum.photos/id/292/600/400".to_string(),
        }),
    ]
}

/// Crowdfunding-style group challenges
pub fn challenges() -> Vec<Challenge> {
    vec![
        Challenge {
            id: "c1".to_string(),
            title: "千份中秋禮盒挑戰".to_string(),
            organization: "喜樂庇護工場".to_string(),
            description: "集眾人之力訂滿 1000 份中秋禮盒，讓工場夥伴有穩定的季節收入，也讓好味道被更多人看見。".to_string(),
            goal: 1000,
            current: 642,
            deadline: "2026-09-20".to_string(),
            participants: 317,
            image: "https://picsum.photos/id/1080/600/400".to_string(),
            product_name: "中秋公益禮盒".to_string(),
            packages: vec![
                SupportPackage {
                    id: "c1-p1".to_string(),
                    name: "暖心單盒".to_string(),
                    price: 680,
                    description: "一份禮盒，直接寄送給您或指定對象。".to_string(),
                    contribution: 1,
                },
                SupportPackage {
                    id: "c1-p2".to_string(),
                    name: "分享三入組".to_string(),
                    price: 1880,
                    description: "三份禮盒，附手寫感謝卡。".to_string(),
                    contribution: 3,
                },
                SupportPackage {
                    id: "c1-p3".to_string(),
                    name: "企業支持方案".to_string(),
                    price: 6200,
                    description: "十份禮盒，可開立捐贈收據並客製企業賀卡。".to_string(),
                    contribution: 10,
                },
            ],
        },
        Challenge {
            id: "c2".to_string(),
            title: "偏鄉烘焙教室續航計畫".to_string(),
            organization: "山線偏鄉教育協會".to_string(),
            description: "每售出一份常溫蛋糕，就挹注一堂山區小學的烘焙課。目標 600 份，讓課程延續整個學期。".to_string(),
            goal: 600,
            current: 188,
            deadline: "2026-10-15".to_string(),
            participants: 96,
            image: "https://picsum.photos/id/312/600/400".to_string(),
            product_name: "山線常溫蛋糕".to_string(),
            packages: vec![
                SupportPackage {
                    id: "c2-p1".to_string(),
                    name: "一堂課的力量".to_string(),
                    price: 450,
                    description: "一份蜂蜜磅蛋糕，支持一堂烘焙課。".to_string(),
                    contribution: 1,
                },
                SupportPackage {
                    id: "c2-p2".to_string(),
                    name: "全班同樂組".to_string(),
                    price: 2100,
                    description: "五份蛋糕，附部落孩子的課堂照片明信片。".to_string(),
                    contribution: 5,
                },
            ],
        },
    ]
}

/// Catering providers scored by the instant-match engine
pub fn catering_providers() -> Vec<CateringProvider> {
    vec![
        CateringProvider {
            id: "m1".to_string(),
            name: "喜樂手作茶點".to_string(),
            specialties: vec!["手工餅乾".to_string(), "司康".to_string(), "水果茶".to_string()],
            min_people: 10,
            max_people: 60,
            price_per_person: 150,
            delivery_time: "3 天前預訂".to_string(),
            issue: "庇護工坊".to_string(),
            description: "由庇護工場夥伴製作的西式茶點組合，適合部門會議與小型活動。".to_string(),
            image: "https://picsum.photos/id/225/600/400".to_string(),
        },
        CateringProvider {
            id: "m2".to_string(),
            name: "山線窯烤餐盒".to_string(),
            specialties: vec!["窯烤麵包".to_string(), "季節沙拉".to_string(), "常溫蛋糕".to_string()],
            min_people: 20,
            max_people: 120,
            price_per_person: 220,
            delivery_time: "5 天前預訂".to_string(),
            issue: "偏鄉教育".to_string(),
            description: "返鄉青年領軍的餐盒品牌，營收回饋山區小學烘焙課程。".to_string(),
            image: "https://picsum.photos/id/365/600/400".to_string(),
        },
        CateringProvider {
            id: "m3".to_string(),
            name: "春日家常宴".to_string(),
            specialties: vec!["家常菜 Buffet".to_string(), "手工點心".to_string()],
            min_people: 30,
            max_people: 200,
            price_per_person: 320,
            delivery_time: "7 天前預訂".to_string(),
            issue: "婦女就業".to_string(),
            description: "二度就業媽媽的拿手家常菜，大型尾牙與婚宴都接得下。".to_string(),
            image: "https://picsum.photos/id/429/600/400".to_string(),
        },
        CateringProvider {
            id: "m4".to_string(),
            name: "小春日和輕食".to_string(),
            specialties: vec!["三明治".to_string(), "沙拉盒".to_string(), "冷泡茶".to_string()],
            min_people: 5,
            max_people: 40,
            price_per_person: 120,
            delivery_time: "2 天前預訂".to_string(),
            issue: "婦女就業".to_string(),
            description: "輕巧的會議輕食，少量也能下單。".to_string(),
            image: "https://picsum.photos/id/493/600/400".to_string(),
        },
        CateringProvider {
            id: "m5".to_string(),
            name: "喜樂節慶禮墩".to_string(),
            specialties: vec!["節慶禮盒".to_string(), "喜餅".to_string()],
            min_people: 50,
            max_people: 500,
            price_per_person: 280,
            delivery_time: "14 天前預訂".to_string(),
            issue: "庇護工坊".to_string(),
            description: "大型活動與企業贈禮的禮盒專案，含客製包裝。".to_string(),
            image: "https://picsum.photos/id/1080/600/400".to_string(),
        },
        CateringProvider {
            id: "m6".to_string(),
            name: "部落廚房蒸籠宴".to_string(),
            specialties: vec!["小米甜點".to_string(), "蒸籠點心".to_string()],
            min_people: 15,
            max_people: 80,
            price_per_person: 190,
            delivery_time: "5 天前預訂".to_string(),
            issue: "偏鄉教育".to_string(),
            description: "結合部落食材的特色蒸籠點心，附產地故事卡。".to_string(),
            image: "https://picsum.photos/id/312/600/400".to_string(),
        },
    ]
}

/// Product catalog for smart search
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "p1".to_string(),
            name: "手工燕麥餅乾".to_string(),
            organization: "喜樂庇護工場".to_string(),
            price: 180,
            image: "https://picsum.photos/id/431/400/300".to_string(),
            product_type: ProductType::Cookie,
            style: ProductStyle::Healthy,
            issue: CharityIssue::ShelteredWorkshop,
            date_added: "2026-07-18".to_string(),
            sales: 326,
        },
        Product {
            id: "p2".to_string(),
            name: "蜂蜜磅蛋糕".to_string(),
            organization: "山線烘焙坊".to_string(),
            price: 450,
            image: "https://picsum.photos/id/835/400/300".to_string(),
            product_type: ProductType::Cake,
            style: ProductStyle::Creative,
            issue: CharityIssue::RuralEducation,
            date_added: "2026-08-02".to_string(),
            sales: 154,
        },
        Product {
            id: "p3".to_string(),
            name: "中秋公益禮盒".to_string(),
            organization: "喜樂庇護工場".to_string(),
            price: 680,
            image: "https://picsum.photos/id/1080/400/300".to_string(),
            product_type: ProductType::GiftBox,
            style: ProductStyle::Festive,
            issue: CharityIssue::ShelteredWorkshop,
            date_added: "2026-08-21".to_string(),
            sales: 642,
        },
        Product {
            id: "p4".to_string(),
            name: "檸檬小塔".to_string(),
            organization: "春日婦女發展中心".to_string(),
            price: 150,
            image: "https://picsum.photos/id/493/400/300".to_string(),
            product_type: ProductType::Snack,
            style: ProductStyle::Creative,
            issue: CharityIssue::WomenEmployment,
            date_added: "2026-06-29".to_string(),
            sales: 518,
        },
        Product {
            id: "p5".to_string(),
            name: "全麥雜糧貝果".to_string(),
            organization: "春日婦女發展中心".to_string(),
            price: 130,
            image: "https://picsum.photos/id/292/400/300".to_string(),
            product_type: ProductType::Snack,
            style: ProductStyle::Healthy,
            issue: CharityIssue::WomenEmployment,
            date_added: "2026-07-05".to_string(),
            sales: 207,
        },
        Product {
            id: "p6".to_string(),
            name: "小米紅藜脆片".to_string(),
            organization: "部落廚房".to_string(),
            price: 160,
            image: "https://picsum.photos/id/312/400/300".to_string(),
            product_type: ProductType::Snack,
            style: ProductStyle::Healthy,
            issue: CharityIssue::RuralEducation,
            date_added: "2026-05-16".to_string(),
            sales: 289,
        },
        Product {
            id: "p7".to_string(),
            name: "莓果乳酪蛋糕".to_string(),
            organization: "春日婦女發展中心".to_string(),
            price: 520,
            image: "https://picsum.photos/id/429/400/300".to_string(),
            product_type: ProductType::Cake,
            style: ProductStyle::Festive,
            issue: CharityIssue::WomenEmployment,
            date_added: "2026-08-11".to_string(),
            sales: 93,
        },
        Product {
            id: "p8".to_string(),
            name: "海鹽奶油酥餅".to_string(),
            organization: "喜樂庇護工場".to_string(),
            price: 220,
            image: "https://picsum.photos/id/225/400/300".to_string(),
            product_type: ProductType::Cookie,
            style: ProductStyle::Creative,
            issue: CharityIssue::ShelteredWorkshop,
            date_added: "2026-06-08".to_string(),
            sales: 411,
        },
        Product {
            id: "p9".to_string(),
            name: "節慶雙層禮盒".to_string(),
            organization: "山線烘焙坊".to_string(),
            price: 880,
            image: "https://picsum.photos/id/365/400/300".to_string(),
            product_type: ProductType::GiftBox,
            style: ProductStyle::Festive,
            issue: CharityIssue::RuralEducation,
            date_added: "2026-08-25".to_string(),
            sales: 57,
        },
        Product {
            id: "p10".to_string(),
            name: "黑糖薑味餅乾".to_string(),
            organization: "部落廚房".to_string(),
            price: 170,
            image: "https://picsum.photos/id/160/400/300".to_string(),
            product_type: ProductType::Cookie,
            style: ProductStyle::Festive,
            issue: CharityIssue::RuralEducation,
            date_added: "2026-04-22".to_string(),
            sales: 178,
        },
        Product {
            id: "p11".to_string(),
            name: "四季水果軟糖".to_string(),
            organization: "喜樂庇護工場".to_string(),
            price: 140,
            image: "https://picsum.photos/id/582/400/300".to_string(),
            product_type: ProductType::Snack,
            style: ProductStyle::Creative,
            issue: CharityIssue::ShelteredWorkshop,
            date_added: "2026-07-27".to_string(),
            sales: 365,
        },
        Product {
            id: "p12".to_string(),
            name: "抹茶戚風蛋糕".to_string(),
            organization: "山線烘焙坊".to_string(),
            price: 390,
            image: "https://picsum.photos/id/106/400/300".to_string(),
            product_type: ProductType::Cake,
            style: ProductStyle::Healthy,
            issue: CharityIssue::RuralEducation,
            date_added: "2026-05-30".to_string(),
            sales: 246,
        },
    ]
}
