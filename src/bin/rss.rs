use std::fs::File;

use portfolio_site::blog::get_meta;
use portfolio_site::content::load_profile;
use portfolio_site::rss::build_channel;

#[tokio::main]
async fn main() {
    let profile = load_profile().expect("Should be able to load the site profile");
    let posts = get_meta(String::new()).await;
    let channel = build_channel(&profile.site, posts);

    let file = File::create("public/rss.xml").expect("Should be able to create RSS feed file");
    channel
        .pretty_write_to(file, b' ', 2)
        .expect("Should be able to write RSS feed");
}
