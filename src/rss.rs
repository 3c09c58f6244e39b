use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    Channel, ChannelBuilder, GuidBuilder, ItemBuilder,
};

use crate::blog::PostMeta;
use crate::content::SiteConfig;
use crate::i18n::{t, Locale};

/// Build the blog's RSS channel. Item links point at the English pages; the
/// feed itself lives at `<base_url>/rss.xml`.
pub fn build_channel(site: &SiteConfig, posts: Vec<PostMeta>) -> Channel {
    let items = posts
        .into_iter()
        .map(|post| {
            let link = format!("{}/{}/blog/{}", site.base_url, Locale::En.code(), post.slug);
            let guid = GuidBuilder::default().value(&link).permalink(true).build();
            ItemBuilder::default()
                .title(post.title.en)
                .description(post.description.en)
                .author(post.author)
                .pub_date(post.date.to_rfc2822())
                .link(link)
                .guid(guid)
                .build()
        })
        .collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(format!("{}/rss.xml", site.base_url));
    atom_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title(format!("{} - Blog", site.title))
        .description(t(Locale::En, "blog.intro"))
        .link(format!("{}/{}/blog", site.base_url, Locale::En.code()))
        .language("en-us".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::get_meta;
    use crate::content::load_profile;

    #[tokio::test]
    async fn channel_carries_every_post() {
        let profile = load_profile().expect("embedded profile should load");
        let posts = get_meta(String::new()).await;
        let channel = build_channel(&profile.site, posts);

        assert_eq!(channel.items().len(), 3);
        let first = &channel.items()[0];
        assert_eq!(
            first.link(),
            Some("https://armannikfar.dev/en/blog/rebuilding-with-rust")
        );
        assert!(first.guid().is_some_and(|guid| guid.is_permalink()));
        assert_eq!(channel.language(), Some("en-us"));
    }
}
