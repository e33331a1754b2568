#[cfg(test)]
mod tests {
    use crate::types::{
        FinalReport, ResearchBrief, ResourceLinks, ResourceSection, SearchResult, UseCaseList,
    };
    use chrono::Utc;

    fn sample_result(index: usize) -> SearchResult {
        SearchResult {
            title: format!("Result {}", index),
            link: format!("https://example.com/{}", index),
            snippet: format!("Snippet text {}", index),
        }
    }

    fn sample_report() -> FinalReport {
        FinalReport {
            input_name: "Acme Robotics".to_string(),
            generated_at: Utc::now(),
            research: ResearchBrief {
                raw_text: "Acme Robotics operates in industrial automation.".to_string(),
            },
            use_cases: UseCaseList {
                raw_text: "1. Predictive maintenance\n2. Visual inspection".to_string(),
            },
            resources: ResourceLinks {
                sections: vec![
                    ResourceSection {
                        heading: "Datasets".to_string(),
                        results: vec![sample_result(1), sample_result(2)],
                    },
                    ResourceSection {
                        heading: "Implementations".to_string(),
                        results: vec![sample_result(3)],
                    },
                ],
            },
            suggestions: Some("AI-powered internal document search.".to_string()),
        }
    }

    #[test]
    fn test_search_result_prompt_block() {
        let result = sample_result(1);
        let block = result.to_prompt_block();

        assert!(block.contains("Title: Result 1"));
        assert!(block.contains("Snippet: Snippet text 1"));
        assert!(block.contains("URL: https://example.com/1"));
    }

    #[test]
    fn test_search_result_markdown_item() {
        let result = sample_result(1);
        assert_eq!(
            result.to_markdown_item(),
            "- [Result 1](https://example.com/1)"
        );
    }

    #[test]
    fn test_resource_links_markdown_grouping() {
        let report = sample_report();
        let markdown = report.resources.to_markdown();

        let datasets = markdown.find("### Datasets").unwrap();
        let implementations = markdown.find("### Implementations").unwrap();
        assert!(datasets < implementations);
        assert!(markdown.contains("- [Result 1](https://example.com/1)"));
        assert!(markdown.contains("- [Result 3](https://example.com/3)"));
    }

    #[test]
    fn test_resource_links_empty() {
        let links = ResourceLinks::default();
        assert!(links.is_empty());
        assert!(links.to_markdown().contains("No resource links found"));
    }

    #[test]
    fn test_resource_links_empty_section() {
        let links = ResourceLinks {
            sections: vec![ResourceSection {
                heading: "Datasets".to_string(),
                results: vec![],
            }],
        };

        let markdown = links.to_markdown();
        assert!(markdown.contains("### Datasets"));
        assert!(markdown.contains("No links found for this query"));
    }

    #[test]
    fn test_final_report_section_order() {
        let report = sample_report();
        let markdown = report.to_markdown();

        let research = markdown.find("## Research").unwrap();
        let use_cases = markdown.find("## Use Cases").unwrap();
        let resources = markdown.find("## Resources").unwrap();
        let suggestions = markdown.find("## Optional Suggestions").unwrap();

        assert!(research < use_cases);
        assert!(use_cases < resources);
        assert!(resources < suggestions);
    }

    #[test]
    fn test_final_report_contains_stage_outputs() {
        let report = sample_report();
        let markdown = report.to_markdown();

        assert!(markdown.contains("# AI Use Case Proposal: Acme Robotics"));
        assert!(markdown.contains("industrial automation"));
        assert!(markdown.contains("Predictive maintenance"));
        assert!(markdown.contains("AI-powered internal document search."));
    }

    #[test]
    fn test_final_report_embeds_resources_verbatim() {
        let report = sample_report();
        let markdown = report.to_markdown();

        // 报告的Resources章节必须原样嵌入资源链接的渲染结果
        assert!(markdown.contains(&report.resources.to_markdown()));
    }

    #[test]
    fn test_final_report_skipped_suggestions() {
        let mut report = sample_report();
        report.suggestions = None;
        let markdown = report.to_markdown();

        assert!(markdown.contains("## Optional Suggestions"));
        assert!(markdown.contains("_Skipped._"));
    }
}
