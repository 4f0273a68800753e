//! Static asset content written into the report's `assets/` tree.
//!
//! Both files are fixed: the stylesheet lays out the card grid and detail
//! sections, and the script only toggles visibility between them. Nothing
//! here depends on the analyzed data.

/// Contents of `assets/css/style.css`.
pub const STYLE_CSS: &str = r#"body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    line-height: 1.6;
    color: #333;
    margin: 0;
    padding: 0;
    background-color: #f8f9fa;
}

.container {
    width: 90%;
    max-width: 1200px;
    margin: 0 auto;
    padding: 20px;
}

header {
    background-color: #232f3e;
    color: white;
    padding: 1rem 0;
    text-align: center;
    margin-bottom: 2rem;
}

h1, h2, h3, h4 {
    font-weight: 600;
}

.category-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 20px;
    margin-bottom: 2rem;
}

.category-card {
    background-color: white;
    border-radius: 8px;
    overflow: hidden;
    box-shadow: 0 4px 6px rgba(0,0,0,0.1);
    transition: transform 0.3s ease, box-shadow 0.3s ease;
    cursor: pointer;
}

.category-card:hover {
    transform: translateY(-5px);
    box-shadow: 0 10px 20px rgba(0,0,0,0.15);
}

.category-image {
    width: 100%;
    height: 200px;
    object-fit: cover;
}

.category-info {
    padding: 1.5rem;
}

.category-name {
    font-size: 1.5rem;
    margin-top: 0;
    margin-bottom: 0.5rem;
    color: #232f3e;
}

.category-stats {
    display: flex;
    justify-content: space-between;
    margin-bottom: 1rem;
}

.stat {
    text-align: center;
}

.stat-value {
    font-size: 1.5rem;
    font-weight: bold;
    color: #232f3e;
}

.stat-label {
    font-size: 0.8rem;
    color: #666;
}

.category-detail {
    display: none;
    background-color: white;
    border-radius: 8px;
    padding: 2rem;
    margin-top: 2rem;
    box-shadow: 0 4px 6px rgba(0,0,0,0.1);
}

.detail-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 1.5rem;
}

.back-button {
    background-color: #232f3e;
    color: white;
    border: none;
    padding: 0.5rem 1rem;
    border-radius: 4px;
    cursor: pointer;
    font-size: 0.9rem;
}

.detail-section {
    margin-bottom: 2rem;
}

.product-card {
    background-color: #f8f9fa;
    border-radius: 8px;
    padding: 1.5rem;
    margin-bottom: 1rem;
    border-left: 4px solid #232f3e;
}

.product-name {
    font-size: 1.2rem;
    margin-top: 0;
    margin-bottom: 0.5rem;
}

.product-rating {
    color: #ff9900;
    font-weight: bold;
    margin-bottom: 1rem;
}

.summary-list {
    list-style-type: none;
    padding-left: 0;
}

.summary-item {
    background-color: white;
    padding: 0.8rem;
    margin-bottom: 0.5rem;
    border-radius: 4px;
    box-shadow: 0 1px 3px rgba(0,0,0,0.1);
}

.chart-container {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 20px;
    margin-top: 2rem;
}

.chart-box {
    background-color: white;
    border-radius: 8px;
    padding: 1rem;
    box-shadow: 0 1px 3px rgba(0,0,0,0.1);
}

.chart-box svg {
    width: 100%;
    height: auto;
}

.improvement-card {
    background-color: #fff8e1;
    border-radius: 8px;
    padding: 1.5rem;
    margin-bottom: 1rem;
    border-left: 4px solid #ff9900;
}

@media (max-width: 768px) {
    .category-grid {
        grid-template-columns: 1fr;
    }

    .chart-container {
        grid-template-columns: 1fr;
    }
}
"#;

/// Contents of `assets/js/script.js`.
///
/// Clicking a card hides the grid and reveals the matching detail section;
/// the back button reverses this. That is the whole interaction model.
pub const SCRIPT_JS: &str = r#"document.addEventListener('DOMContentLoaded', function() {
    const categoryCards = document.querySelectorAll('.category-card');
    const categoryDetails = document.querySelectorAll('.category-detail');
    const backButtons = document.querySelectorAll('.back-button');
    const categoryGrid = document.querySelector('.category-grid');

    categoryCards.forEach(card => {
        card.addEventListener('click', function() {
            const categoryId = this.getAttribute('data-category');

            categoryGrid.style.display = 'none';
            document.getElementById(`detail-${categoryId}`).style.display = 'block';
            window.scrollTo(0, 0);
        });
    });

    backButtons.forEach(button => {
        button.addEventListener('click', function() {
            categoryDetails.forEach(detail => {
                detail.style.display = 'none';
            });

            categoryGrid.style.display = 'grid';
            window.scrollTo(0, 0);
        });
    });
});
"#;
