use super::*;
use relevance_classifier::RelevanceLabel;
use wiremock::matchers::header;

#[tokio::test]
async fn labels_every_row_in_input_order() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_scripted(&server).await;

    let input = write_input_csv(
        "title,question_text\n\
         Budget,The union budget was tabled in parliament\n\
         Cricket,The cricket league final drew record crowds\n\
         Galaxy,A distant galaxy was photographed\n",
    );
    let output = output_file();
    let config = mock_job_config(&server, input.path(), output.path());

    let summary = ClassificationJob::hosted(config)?.run().await?;

    assert_eq!(summary.rows, 3);
    assert_eq!(summary.yes, 1);
    assert_eq!(summary.no, 1);
    assert_eq!(summary.unknown, 1);
    assert_eq!(summary.errors, 0);

    let written = std::fs::read_to_string(output.path())?;
    assert_eq!(
        written,
        "title,question_text,classification\n\
         Budget,The union budget was tabled in parliament,YES\n\
         Cricket,The cricket league final drew record crowds,NO\n\
         Galaxy,A distant galaxy was photographed,UNKNOWN\n"
    );
    Ok(())
}

#[tokio::test]
async fn empty_text_row_is_still_classified() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_scripted(&server).await;

    // Second row has an empty text field; it must still reach the backend
    // with an empty prompt body and come back labeled.
    let input = write_input_csv(
        "title,question_text\n\
         Budget,The union budget was tabled in parliament\n\
         Blank,\n",
    );
    let output = output_file();
    let config = mock_job_config(&server, input.path(), output.path());

    let summary = ClassificationJob::hosted(config)?.run().await?;
    assert_eq!(summary.rows, 2);

    let written = std::fs::read_to_string(output.path())?;
    assert!(written.ends_with("Blank,,YES\n"));
    Ok(())
}

#[tokio::test]
async fn one_failed_call_marks_only_that_row() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_scripted(&server).await;

    let input = write_input_csv(
        "title,question_text\n\
         Budget,The union budget was tabled in parliament\n\
         Bridge,Authorities probe the bridge collapse\n\
         Cricket,The cricket league final drew record crowds\n",
    );
    let output = output_file();
    let config = mock_job_config(&server, input.path(), output.path());

    let summary = ClassificationJob::hosted(config)?.run().await?;

    assert_eq!(summary.rows, 3);
    assert_eq!(summary.errors, 1);

    let written = std::fs::read_to_string(output.path())?;
    assert_eq!(
        written,
        "title,question_text,classification\n\
         Budget,The union budget was tabled in parliament,YES\n\
         Bridge,Authorities probe the bridge collapse,ERROR\n\
         Cricket,The cricket league final drew record crowds,NO\n"
    );
    Ok(())
}

#[tokio::test]
async fn rerun_with_fixed_responses_is_byte_identical() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_scripted(&server).await;

    let input = write_input_csv(
        "title,question_text\n\
         Budget,The union budget was tabled in parliament\n\
         Cricket,The cricket league final drew record crowds\n",
    );
    let output = output_file();
    let config = mock_job_config(&server, input.path(), output.path());
    let job = ClassificationJob::hosted(config)?;

    job.run().await?;
    let first = std::fs::read(output.path())?;
    job.run().await?;
    let second = std::fs::read(output.path())?;

    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn missing_text_column_aborts_before_any_request() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(chat_response("YES"))
        .expect(0)
        .mount(&server)
        .await;

    let input = write_input_csv("title,body\nBudget,The union budget was tabled\n");
    let output = output_file();
    let config = mock_job_config(&server, input.path(), output.path());

    let err = ClassificationJob::hosted(config)?.run().await.unwrap_err();
    assert!(err.to_string().contains("question_text"));
    Ok(())
}

#[tokio::test]
async fn missing_input_file_is_fatal() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let output = output_file();
    let config = mock_job_config(
        &server,
        std::path::Path::new("does_not_exist.csv"),
        output.path(),
    );

    let err = ClassificationJob::hosted(config)?.run().await.unwrap_err();
    assert!(err.to_string().contains("not found"));
    Ok(())
}

#[tokio::test]
async fn bearer_credential_is_sent_with_each_request() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(chat_response("YES"))
        .expect(1)
        .mount(&server)
        .await;

    let input = write_input_csv("title,question_text\nBudget,The union budget was tabled\n");
    let output = output_file();
    let config = mock_job_config(&server, input.path(), output.path());

    let summary = ClassificationJob::hosted(config)?.run().await?;
    assert_eq!(summary.yes, 1);
    Ok(())
}

#[tokio::test]
async fn bounded_concurrency_preserves_input_order() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_scripted(&server).await;

    let input = write_input_csv(
        "title,question_text\n\
         Budget,The union budget was tabled in parliament\n\
         Cricket,The cricket league final drew record crowds\n\
         Galaxy,A distant galaxy was photographed\n\
         Bills,Parliament budget session extended\n",
    );
    let output = output_file();
    let config = mock_job_config(&server, input.path(), output.path()).with_concurrency(3);

    let summary = ClassificationJob::hosted(config)?.run().await?;
    assert_eq!(summary.rows, 4);

    let written = std::fs::read_to_string(output.path())?;
    let labels: Vec<&str> = written
        .lines()
        .skip(1)
        .map(|line| line.rsplit(',').next().unwrap())
        .collect();
    assert_eq!(labels, ["YES", "NO", "UNKNOWN", "YES"]);
    Ok(())
}

#[tokio::test]
async fn offline_mode_needs_no_credential_or_network() -> anyhow::Result<()> {
    let input = write_input_csv(
        "title,question_text\n\
         Policy,The government announced new welfare legislation in parliament\n\
         Sports,The cricket team celebrated with a football match and a movie\n",
    );
    let output = output_file();
    let config = JobConfig::new(input.path(), output.path())
        .with_prompt_template(PromptTemplate::new("{text}")?)
        .with_logging_config(LoggingConfig::new().logging_enabled(false));

    let summary = ClassificationJob::offline(config)?.run().await?;
    assert_eq!(summary.rows, 2);

    let written = std::fs::read_to_string(output.path())?;
    let labels: Vec<RelevanceLabel> = written
        .lines()
        .skip(1)
        .map(|line| match line.rsplit(',').next().unwrap() {
            "YES" => RelevanceLabel::Yes,
            "NO" => RelevanceLabel::No,
            other => panic!("unexpected label {other}"),
        })
        .collect();
    assert_eq!(labels, [RelevanceLabel::Yes, RelevanceLabel::No]);
    Ok(())
}
