//! Offline demonstration: summarize a bundled sample article, no network.

use blog_summarizer::summarize;

const SAMPLE_TITLE: &str = "The Future of Artificial Intelligence in Healthcare";

const SAMPLE_CONTENT: &str = "Artificial intelligence is revolutionizing healthcare \
    in unprecedented ways. From diagnostic imaging to drug discovery, AI technologies \
    are transforming how medical professionals approach patient care and treatment. \
    Machine learning algorithms can now analyze medical images with remarkable \
    accuracy, often detecting diseases earlier than traditional methods. Computer \
    vision systems are being used to identify cancer cells in pathology slides and \
    detect diabetic retinopathy in eye scans. Natural language processing is helping \
    doctors extract valuable insights from electronic health records. These systems \
    can identify patterns in patient data that might otherwise go unnoticed, leading \
    to better treatment outcomes and personalized medicine approaches. The \
    pharmaceutical industry is leveraging AI for drug discovery and development. AI \
    models can predict how different compounds will interact with biological targets, \
    significantly reducing the time and cost associated with bringing new medications \
    to market. However, the integration of AI in healthcare also presents challenges. \
    Issues around data privacy, algorithmic bias, and the need for regulatory \
    approval must be carefully addressed. Healthcare professionals need proper \
    training to effectively use these new technologies. Despite these challenges, \
    the potential benefits of AI in healthcare are enormous. As technology continues \
    to advance, we can expect to see even more innovative applications that improve \
    patient outcomes and make healthcare more accessible and efficient.";

fn main() {
    println!("Blog Summarizer Demo");
    println!("{}", "=".repeat(50));

    println!();
    println!("Original Content:");
    println!("{}", "-".repeat(30));
    println!("Title: {}", SAMPLE_TITLE);
    println!("Word Count: {} words", SAMPLE_CONTENT.split_whitespace().count());
    println!("Character Count: {} characters", SAMPLE_CONTENT.chars().count());

    println!();
    println!("Generating summary...");
    let result = summarize(SAMPLE_TITLE, SAMPLE_CONTENT, 100);

    if !result.success {
        eprintln!("Error: {}", result.error.unwrap_or_default());
        std::process::exit(1);
    }

    println!();
    println!("Summary Generated Successfully!");
    println!("{}", "=".repeat(50));

    println!();
    println!("Summary ({} words):", result.summary_length.unwrap_or_default());
    println!("{}", "-".repeat(30));
    println!("{}", result.summary.unwrap_or_default());

    println!();
    println!("Top Keywords:");
    println!("{}", "-".repeat(30));
    println!("{}", result.keywords.unwrap_or_default().join(", "));

    println!();
    println!("Key Points:");
    println!("{}", "-".repeat(30));
    for (index, point) in result.key_points.unwrap_or_default().iter().enumerate() {
        println!("{}. {}", index + 1, point);
    }

    println!();
    println!("Statistics:");
    println!("{}", "-".repeat(30));
    println!("Original Length: {} words", result.original_length.unwrap_or_default());
    println!("Summary Length: {} words", result.summary_length.unwrap_or_default());
    println!("Compression Ratio: {}%", result.compression_ratio.unwrap_or_default());
}
