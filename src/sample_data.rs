//! Static catalog and accounts loaded by the `seed` binary.

use crate::domain::user::UserRole;
use crate::forms::products::AddProductForm;
use crate::forms::users::AddUserForm;

/// Password shared by the sample accounts.
pub const SAMPLE_PASSWORD: &str = "123456";

/// Products and users inserted into a freshly seeded database.
#[derive(Debug, Clone)]
pub struct SampleData {
    pub products: Vec<AddProductForm>,
    pub users: Vec<AddUserForm>,
}

#[allow(clippy::too_many_arguments)]
fn product(
    name: &str,
    slug: &str,
    category: &str,
    brand: &str,
    description: &str,
    images: &[&str],
    price: &str,
    stock: i32,
    banner: Option<&str>,
) -> AddProductForm {
    AddProductForm {
        name: name.to_string(),
        slug: slug.to_string(),
        category: category.to_string(),
        brand: brand.to_string(),
        description: description.to_string(),
        stock,
        images: images.iter().map(|image| image.to_string()).collect(),
        price: price.to_string(),
        is_featured: banner.is_some(),
        banner: banner.map(str::to_string),
    }
}

fn user(name: &str, email: &str, role: UserRole) -> AddUserForm {
    AddUserForm {
        name: name.to_string(),
        email: email.to_string(),
        password: SAMPLE_PASSWORD.to_string(),
        role,
    }
}

impl Default for SampleData {
    fn default() -> Self {
        let products = vec![
            product(
                "Polo Sporting Stretch Shirt",
                "polo-sporting-stretch-shirt",
                "Men's Dress Shirts",
                "Polo",
                "Classic Polo style with modern comfort",
                &["/assets/images/sample-products/p1-1.jpg", "/assets/images/sample-products/p1-2.jpg"],
                "59.99",
                5,
                Some("banner-1.jpg"),
            ),
            product(
                "Brooks Brothers Long Sleeved Shirt",
                "brooks-brothers-long-sleeved-shirt",
                "Men's Dress Shirts",
                "Brooks Brothers",
                "Timeless style and premium comfort",
                &["/assets/images/sample-products/p2-1.jpg", "/assets/images/sample-products/p2-2.jpg"],
                "85.90",
                10,
                Some("banner-2.jpg"),
            ),
            product(
                "Tommy Hilfiger Classic Fit Dress Shirt",
                "tommy-hilfiger-classic-fit-dress-shirt",
                "Men's Dress Shirts",
                "Tommy Hilfiger",
                "A perfect blend of sophistication and comfort",
                &["/assets/images/sample-products/p3-1.jpg", "/assets/images/sample-products/p3-2.jpg"],
                "99.95",
                0,
                None,
            ),
            product(
                "Calvin Klein Slim Fit Stretch Shirt",
                "calvin-klein-slim-fit-stretch-shirt",
                "Men's Dress Shirts",
                "Calvin Klein",
                "Streamlined design with flexible stretch fabric",
                &["/assets/images/sample-products/p4-1.jpg", "/assets/images/sample-products/p4-2.jpg"],
                "39.95",
                10,
                None,
            ),
            product(
                "Polo Ralph Lauren Oxford Shirt",
                "polo-ralph-lauren-oxford-shirt",
                "Men's Dress Shirts",
                "Polo",
                "Iconic Polo design with refined oxford fabric",
                &["/assets/images/sample-products/p5-1.jpg", "/assets/images/sample-products/p5-2.jpg"],
                "79.99",
                10,
                None,
            ),
            product(
                "Polo Classic Pink Hoodie",
                "polo-classic-pink-hoodie",
                "Men's Sweatshirts",
                "Polo",
                "Soft, stylish, and perfect for laid-back days",
                &["/assets/images/sample-products/p6-1.jpg", "/assets/images/sample-products/p6-2.jpg"],
                "99.99",
                10,
                None,
            ),
        ];

        let users = vec![
            user("Admin", "admin@example.com", UserRole::Admin),
            user("Jane Doe", "user@example.com", UserRole::User),
        ];

        Self { products, users }
    }
}
