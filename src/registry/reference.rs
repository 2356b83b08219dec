//! Built-in platform data for viddl.me.

use super::descriptor::{Faq, PlatformDescriptor};

struct Entry {
    slug: &'static str,
    name: &'static str,
    color: &'static str,
    icon: &'static str,
    domain: &'static str,
    title: &'static str,
    description: &'static str,
    placeholder: &'static str,
    features: &'static [&'static str],
    faqs: &'static [(&'static str, &'static str)],
}

const ENTRIES: &[Entry] = &[
    Entry {
        slug: "youtube-downloader",
        name: "YouTube",
        color: "#FF0000",
        icon: "▶️",
        domain: "youtube.com",
        title: "YouTube Video Downloader - Download YouTube Videos Free | viddl.me",
        description: "Download YouTube videos in MP4, HD, and 4K quality. Free YouTube downloader - no signup required. Save YouTube videos instantly.",
        placeholder: "Paste YouTube video URL here...",
        features: &["HD & 4K quality", "YouTube Shorts support", "Playlists supported", "Fast downloads"],
        faqs: &[
            ("Can I download YouTube Shorts?", "Yes! Simply paste the YouTube Shorts URL and download it like any other video."),
            ("What quality options are available?", "We offer multiple quality options including 360p, 480p, 720p HD, 1080p Full HD, and 4K when available."),
            ("Can I download YouTube playlists?", "Currently, you can download videos one at a time. Paste each video URL separately."),
            ("Is it free to download YouTube videos?", "Yes, viddl.me is completely free with no hidden fees or subscriptions."),
        ],
    },
    Entry {
        slug: "twitter-downloader",
        name: "Twitter/X",
        color: "#1DA1F2",
        icon: "𝕏",
        domain: "twitter.com",
        title: "Twitter Video Downloader - Download X Videos Free | viddl.me",
        description: "Download Twitter/X videos easily. Free Twitter video downloader - save tweets with video, GIFs, and media instantly.",
        placeholder: "Paste Twitter/X video URL here...",
        features: &["Download tweets with video", "GIF support", "High quality downloads", "Works with x.com"],
        faqs: &[
            ("How do I get the Twitter video URL?", "Click on the tweet, then copy the URL from your browser address bar or use the share button."),
            ("Can I download Twitter GIFs?", "Yes! GIFs are downloaded as MP4 video files for better quality and smaller size."),
            ("Does it work with X.com?", "Yes, we support both twitter.com and x.com URLs."),
            ("Can I download private tweets?", "No, only public tweets can be downloaded."),
        ],
    },
    Entry {
        slug: "instagram-downloader",
        name: "Instagram",
        color: "#E4405F",
        icon: "📷",
        domain: "instagram.com",
        title: "Instagram Video Downloader - Download Reels & Stories Free | viddl.me",
        description: "Download Instagram Reels, videos, and stories. Free Instagram downloader - save IG content in high quality.",
        placeholder: "Paste Instagram video URL here...",
        features: &["Reels support", "IGTV videos", "Story downloads", "High quality"],
        faqs: &[
            ("Can I download Instagram Reels?", "Yes! Paste the Reel URL and download it in high quality."),
            ("How do I download Instagram Stories?", "Copy the story link and paste it here. Note: only public stories can be downloaded."),
            ("Can I download from private accounts?", "No, only content from public accounts is accessible."),
            ("What about carousel posts?", "For posts with multiple videos, you can select which one to download."),
        ],
    },
    Entry {
        slug: "facebook-downloader",
        name: "Facebook",
        color: "#1877F2",
        icon: "📘",
        domain: "facebook.com",
        title: "Facebook Video Downloader - Download FB Videos Free | viddl.me",
        description: "Download Facebook videos in HD quality. Free FB video downloader - save Facebook videos, reels, and stories.",
        placeholder: "Paste Facebook video URL here...",
        features: &["HD quality", "Facebook Reels", "Watch videos", "Fast processing"],
        faqs: &[
            ("How do I get the Facebook video URL?", "Right-click on the video and select \"Copy video URL\" or copy from the address bar."),
            ("Can I download Facebook Reels?", "Yes, Facebook Reels are fully supported."),
            ("What about private videos?", "Only public videos can be downloaded. Private or friends-only videos are not accessible."),
            ("Are Facebook Watch videos supported?", "Yes, you can download videos from Facebook Watch."),
        ],
    },
    Entry {
        slug: "reddit-downloader",
        name: "Reddit",
        color: "#FF4500",
        icon: "🤖",
        domain: "reddit.com",
        title: "Reddit Video Downloader - Download Reddit Videos with Audio | viddl.me",
        description: "Download Reddit videos with audio. Free Reddit video downloader - save Reddit posts, GIFs, and videos in high quality.",
        placeholder: "Paste Reddit video URL here...",
        features: &["Videos with audio", "GIF support", "High quality", "All subreddits"],
        faqs: &[
            ("Why do Reddit videos sometimes have no audio?", "Reddit stores video and audio separately. Our tool combines them automatically for you."),
            ("Can I download Reddit GIFs?", "Yes! GIFs are converted to MP4 for better quality."),
            ("Does it work with NSFW content?", "Yes, as long as the content is publicly accessible."),
            ("What URL format should I use?", "Use the full post URL or the direct video link."),
        ],
    },
    Entry {
        slug: "threads-downloader",
        name: "Threads",
        color: "#000000",
        icon: "🧵",
        domain: "threads.net",
        title: "Threads Video Downloader - Download Threads Videos Free | viddl.me",
        description: "Download Threads videos easily. Free Threads downloader - save videos from threads.net in high quality.",
        placeholder: "Paste Threads video URL here...",
        features: &["High quality", "Fast downloads", "Easy to use", "No signup"],
        faqs: &[
            ("How do I get the Threads video URL?", "Open the post in Threads app or web, tap share, and copy the link."),
            ("Can I download carousel posts?", "For posts with multiple videos, you can select which one to download."),
            ("Is it free?", "Yes, completely free with no limits."),
            ("What quality will I get?", "Videos are downloaded in the best available quality."),
        ],
    },
];

/// Owned copies of the built-in descriptors, in published order.
pub fn platforms() -> Vec<PlatformDescriptor> {
    ENTRIES
        .iter()
        .map(|e| PlatformDescriptor {
            slug: e.slug.to_string(),
            name: e.name.to_string(),
            color: e.color.to_string(),
            icon: e.icon.to_string(),
            domain: e.domain.to_string(),
            title: e.title.to_string(),
            description: e.description.to_string(),
            placeholder: e.placeholder.to_string(),
            features: e.features.iter().map(|f| f.to_string()).collect(),
            faqs: e.faqs.iter().map(|(q, a)| Faq::new(*q, *a)).collect(),
        })
        .collect()
}
