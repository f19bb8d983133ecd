use notification_service::config::Config;
use notification_service::startup::Application;

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(Config {
            port: 0,
            ..Config::default()
        })
        .await
    }

    pub async fn spawn_with(config: Config) -> Self {
        let app = Application::build(&config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{port}");

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        Self { address, port }
    }
}
