use crate::{
    config::CatalogConfig,
    database::CatalogStore,
    error::{AppError, Result},
    models::{
        CategoriesPage, Category, CategoryPage, CategoryWithCount, ContactPage, HomePage, Page,
        ProductFilter, ProductOption, ProductPage, ProductWithCategory, ProductsPage,
    },
};

pub async fn list_categories_with_available_count(
    store: &dyn CatalogStore,
) -> Result<Vec<CategoryWithCount>> {
    store.categories_with_available_count().await
}

/// Categories that have at least one available product, first `limit` in
/// aggregation order.
pub fn home_categories(categories: Vec<CategoryWithCount>, limit: usize) -> Vec<CategoryWithCount> {
    categories
        .into_iter()
        .filter(|c| c.available_products_count > 0)
        .take(limit)
        .collect()
}

pub async fn list_available_products(
    store: &dyn CatalogStore,
    filter: ProductFilter,
    page: u32,
    page_size: u32,
    path: &str,
) -> Result<Page<ProductWithCategory>> {
    let page = page.max(1);
    let page_size = page_size.max(1);

    let total = store.count_available_products(filter).await?;
    let offset = Page::<ProductWithCategory>::offset(page, page_size);

    let products = if offset < total {
        store
            .available_products(filter, i64::from(page_size), offset)
            .await?
    } else {
        Vec::new()
    };

    Ok(Page::new(products, total, page, page_size, path))
}

pub async fn get_featured_products(
    store: &dyn CatalogStore,
    limit: u32,
) -> Result<Vec<ProductWithCategory>> {
    store
        .available_products(ProductFilter::featured(), i64::from(limit), 0)
        .await
}

pub async fn get_latest_products(
    store: &dyn CatalogStore,
    limit: u32,
) -> Result<Vec<ProductWithCategory>> {
    store
        .available_products(ProductFilter::default(), i64::from(limit), 0)
        .await
}

/// Looks the product up regardless of availability.
pub async fn get_product_by_slug(
    store: &dyn CatalogStore,
    slug: &str,
) -> Result<ProductWithCategory> {
    store
        .find_product_by_slug(slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
}

pub async fn get_related_products(
    store: &dyn CatalogStore,
    product: &ProductWithCategory,
    limit: u32,
) -> Result<Vec<ProductWithCategory>> {
    let filter = ProductFilter {
        exclude_id: Some(product.product.id),
        ..ProductFilter::in_category(product.product.category_id)
    };

    store
        .available_products(filter, i64::from(limit), 0)
        .await
}

pub async fn get_category_by_slug(store: &dyn CatalogStore, slug: &str) -> Result<Category> {
    store
        .find_category_by_slug(slug)
        .await?
        .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
}

pub async fn list_product_options(store: &dyn CatalogStore) -> Result<Vec<ProductOption>> {
    store.available_product_options().await
}

pub async fn home_page(store: &dyn CatalogStore, config: &CatalogConfig) -> Result<HomePage> {
    let featured_products = get_featured_products(store, config.home_featured_limit).await?;
    let categories = home_categories(
        list_categories_with_available_count(store).await?,
        config.home_category_limit,
    );
    let latest_products = get_latest_products(store, config.home_latest_limit).await?;

    Ok(HomePage {
        featured_products,
        categories,
        latest_products,
    })
}

pub async fn products_page(
    store: &dyn CatalogStore,
    config: &CatalogConfig,
    page: u32,
) -> Result<ProductsPage> {
    let products = list_available_products(
        store,
        ProductFilter::default(),
        page,
        config.page_size,
        "/products",
    )
    .await?;
    let categories = list_categories_with_available_count(store).await?;

    Ok(ProductsPage {
        products,
        categories,
    })
}

pub async fn product_page(
    store: &dyn CatalogStore,
    config: &CatalogConfig,
    slug: &str,
) -> Result<ProductPage> {
    let product = get_product_by_slug(store, slug).await?;
    let related_products = get_related_products(store, &product, config.related_limit).await?;

    Ok(ProductPage {
        product,
        related_products,
    })
}

pub async fn categories_page(store: &dyn CatalogStore) -> Result<CategoriesPage> {
    Ok(CategoriesPage {
        categories: list_categories_with_available_count(store).await?,
    })
}

pub async fn category_page(
    store: &dyn CatalogStore,
    config: &CatalogConfig,
    slug: &str,
    page: u32,
) -> Result<CategoryPage> {
    let category = get_category_by_slug(store, slug).await?;
    let path = format!("/categories/{}", category.slug);
    let products = list_available_products(
        store,
        ProductFilter::in_category(category.id),
        page,
        config.page_size,
        &path,
    )
    .await?;
    let categories = list_categories_with_available_count(store).await?;

    Ok(CategoryPage {
        category,
        products,
        categories,
    })
}

pub async fn contact_page(store: &dyn CatalogStore) -> Result<ContactPage> {
    Ok(ContactPage {
        products: list_product_options(store).await?,
    })
}
