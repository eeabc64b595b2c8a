//! Packages a rendered portfolio as a downloadable ZIP archive.

use std::io::{Cursor, Write};

use anyhow::{Context, Result};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::models::portfolio::Portfolio;
use super::templates::render_html;

pub const INDEX_ENTRY: &str = "index.html";
pub const README_ENTRY: &str = "README.md";

/// Builds the archive in memory: `index.html` rendered with the portfolio's
/// own template, plus a deployment README.
pub fn package_site(portfolio: &Portfolio) -> Result<Vec<u8>> {
    let html = render_html(portfolio, &portfolio.selected_template);
    let readme = render_readme(&portfolio.data.name);

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    zip.start_file(INDEX_ENTRY, options)
        .context("Failed to start index.html entry")?;
    zip.write_all(html.as_bytes())?;

    zip.start_file(README_ENTRY, options)
        .context("Failed to start README.md entry")?;
    zip.write_all(readme.as_bytes())?;

    let cursor = zip.finish().context("Failed to finalize ZIP archive")?;
    Ok(cursor.into_inner())
}

fn render_readme(name: &str) -> String {
    format!(
        r#"# {name} - Portfolio Website

This is your generated portfolio website. It's a single HTML file that's ready to deploy!

## Deployment Options

### GitHub Pages
1. Create a new repository on GitHub
2. Upload `index.html` to the repository
3. Go to Settings > Pages
4. Select "main" branch and save
5. Your site will be live at `https://yourusername.github.io/repository-name`

### Vercel
1. Visit https://vercel.com
2. Sign in and click "New Project"
3. Upload this folder
4. Your site will be deployed instantly!

### Netlify
1. Visit https://netlify.com
2. Drag and drop this folder to "Sites"
3. Your site is live!

## Customization
You can edit the HTML file directly to customize colors, fonts, and layout.

Generated with PortfolioAI
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::PortfolioData;
    use std::io::Read;
    use zip::ZipArchive;

    fn sample_portfolio(template: &str) -> Portfolio {
        Portfolio::new(
            PortfolioData {
                name: "Barbara Liskov".to_string(),
                title: "Professor".to_string(),
                email: "liskov@mit.edu".to_string(),
                phone: String::new(),
                about: "Substitution principle.".to_string(),
                education: vec![],
                skills: vec![],
                projects: vec![],
                experience: vec![],
            },
            template.to_string(),
        )
    }

    fn read_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut contents = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        contents
    }

    #[test]
    fn test_archive_has_magic_bytes_and_exactly_two_entries() {
        let bytes = package_site(&sample_portfolio("minimal-professional")).unwrap();

        assert_eq!(&bytes[..2], b"PK");
        let archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let mut names: Vec<&str> = archive.file_names().collect();
        names.sort_unstable();
        assert_eq!(names, vec![README_ENTRY, INDEX_ENTRY]);
    }

    #[test]
    fn test_index_uses_portfolio_template() {
        let portfolio = sample_portfolio("creative-bold");
        let bytes = package_site(&portfolio).unwrap();

        let index = read_entry(&bytes, INDEX_ENTRY);
        assert_eq!(index, render_html(&portfolio, "creative-bold"));
    }

    #[test]
    fn test_readme_names_the_owner() {
        let bytes = package_site(&sample_portfolio("tech-modern")).unwrap();

        let readme = read_entry(&bytes, README_ENTRY);
        assert!(readme.starts_with("# Barbara Liskov - Portfolio Website"));
        assert!(readme.contains("### GitHub Pages"));
        assert!(readme.contains("### Netlify"));
    }
}
