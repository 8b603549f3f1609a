use crate::domain::product::value_objects::Gender;
use crate::domain::user::model::{ROLE_ADMIN, ROLE_USER};

pub struct SeedUser {
    pub email: &'static str,
    pub password: &'static str,
    pub full_name: &'static str,
    pub roles: &'static [&'static str],
}

pub struct SeedProduct {
    pub title: &'static str,
    pub description: &'static str,
    pub price: f64,
    pub stock: i32,
    pub sizes: &'static [&'static str],
    pub gender: Gender,
    pub tags: &'static [&'static str],
    pub images: &'static [&'static str],
}

/// The first user is the admin every seeded product is attributed to.
pub fn initial_users() -> Vec<SeedUser> {
    vec![
        SeedUser {
            email: "admin@example.com",
            password: "Abc123!",
            full_name: "Admin User",
            roles: &[ROLE_ADMIN, ROLE_USER],
        },
        SeedUser {
            email: "customer@example.com",
            password: "Abc123!",
            full_name: "Regular Customer",
            roles: &[ROLE_USER],
        },
    ]
}

pub fn initial_products() -> Vec<SeedProduct> {
    vec![
        SeedProduct {
            title: "Men's Chill Crew Neck Sweatshirt",
            description: "Introducing the Chill Collection. The crew neck sweatshirt is made from heavy cotton with a relaxed fit.",
            price: 75.0,
            stock: 7,
            sizes: &["XS", "S", "M", "L", "XL", "XXL"],
            gender: Gender::Men,
            tags: &["sweatshirt"],
            images: &["1740176-00-A_0_2000.jpg", "1740176-00-A_1.jpg"],
        },
        SeedProduct {
            title: "Men's Quilted Shirt Jacket",
            description: "The quilted shirt jacket features a uniquely fit, quilted design for warmth and mobility in cold weather seasons.",
            price: 200.0,
            stock: 5,
            sizes: &["XS", "S", "M", "XL", "XXL"],
            gender: Gender::Men,
            tags: &["jacket"],
            images: &["1740507-00-A_0_2000.jpg", "1740507-00-A_1.jpg"],
        },
        SeedProduct {
            title: "Women's Cropped Puffer Jacket",
            description: "The cropped puffer jacket features a uniquely cropped silhouette for the perfect, modern style.",
            price: 225.0,
            stock: 85,
            sizes: &["XS", "S", "M"],
            gender: Gender::Women,
            tags: &["jacket"],
            images: &["1654252-00-A_0_2000.jpg", "1654252-00-A_1.jpg"],
        },
        SeedProduct {
            title: "Women's T Logo Short Sleeve Scoop Neck Tee",
            description: "Designed for style and comfort, the ultrasoft scoop neck tee features a tonal logo on the chest.",
            price: 35.0,
            stock: 30,
            sizes: &["XS", "S", "M", "L", "XL", "XXL"],
            gender: Gender::Women,
            tags: &["shirt"],
            images: &["8765090-00-A_0_2000.jpg", "8765090-00-A_1.jpg"],
        },
        SeedProduct {
            title: "Kids Checkered Tee",
            description: "The checkered tee is made from long grain, GMO free Peruvian cotton.",
            price: 30.0,
            stock: 10,
            sizes: &["XS", "S", "M"],
            gender: Gender::Kid,
            tags: &["shirt"],
            images: &["8529312-00-A_0_2000.jpg", "8529312-00-A_1.jpg"],
        },
        SeedProduct {
            title: "Cybertruck Bulletproof Tee",
            description: "Inspired by the Cybertruck unveiling event, the bulletproof tee is made of 100% cotton.",
            price: 30.0,
            stock: 150,
            sizes: &["M", "L"],
            gender: Gender::Unisex,
            tags: &["shirt"],
            images: &["7654393-00-A_2_2000.jpg", "7654393-00-A_3.jpg"],
        },
    ]
}
