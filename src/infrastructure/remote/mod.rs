mod gateway;

pub use gateway::RemoteApiGateway;
