//! Built-in AWS topology presets.
//!
//! Each preset reproduces one of the project's illustration diagrams: a flat
//! VPC overview, a clustered VPC, and a VPC with a nested public subnet and
//! orthogonal edge routing. [`Preset`] names them for the CLI.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{
    DiagramBuilder,
    model::{Diagram, Direction, EdgeStyle, ModelError, NodeKind},
};

/// Flat AWS architecture overview: every component at top level, plain
/// associations, and a bidirectional "Security Group" edge between the
/// instance and its security group.
pub fn aws_architecture() -> Result<Diagram, ModelError> {
    let mut builder = DiagramBuilder::new("AWS Architecture");

    let vpc = builder.node(NodeKind::Vpc, "VPC")?;
    let igw = builder.node(NodeKind::InternetGateway, "Internet Gateway")?;
    builder.edge(vpc, igw)?;

    let subnet = builder.node(NodeKind::Subnet, "Public Subnet")?;
    builder.edge(vpc, subnet)?;

    let route_table = builder.node(NodeKind::RouteTable, "Route Table")?;
    builder.edge(vpc, route_table)?;
    builder.edge(route_table, igw)?;

    let nacl = builder.node(NodeKind::NetworkAcl, "Network ACL")?;
    builder.edge(subnet, nacl)?;

    let security_group = builder.node(NodeKind::SecurityGroup, "Security Group")?;
    let ec2 = builder.node(NodeKind::ComputeInstance, "EC2 Instance")?;

    builder.edge(subnet, ec2)?;
    builder.edge_with(
        ec2,
        security_group,
        EdgeStyle::labeled("Security Group").direction(Direction::Bidirectional),
    )?;

    builder.edge(subnet, route_table)?;

    // VPC associations
    builder.edge(vpc, subnet)?;
    builder.edge(vpc, nacl)?;
    builder.edge(vpc, security_group)?;

    Ok(builder.finish())
}

/// Clustered AWS architecture: a user outside a "VPC" cluster holding the
/// gateway, subnet, route table, NACL, security group, and instance.
pub fn aws_cluster() -> Result<Diagram, ModelError> {
    let mut builder = DiagramBuilder::new("AWS Architecture");

    let user = builder.node(NodeKind::UserActor, "User")?;

    builder.cluster("VPC", |b| {
        let igw = b.node(NodeKind::InternetGateway, "Internet Gateway")?;
        let subnet = b.node(NodeKind::Subnet, "Public Subnet")?;
        let route_table = b.node(NodeKind::RouteTable, "Route Table")?;
        let nacl = b.node(NodeKind::NetworkAcl, "Network ACL")?;
        let security_group = b.node(NodeKind::SecurityGroup, "Security Group")?;
        let ec2 = b.node(NodeKind::ComputeInstance, "EC2 Instance")?;

        b.edge(igw, route_table)?;
        b.edge(subnet, route_table)?;
        b.edge(subnet, nacl)?;
        b.edge(subnet, ec2)?;
        b.edge(ec2, security_group)
    })?;

    builder.edge_with(user, "EC2 Instance", EdgeStyle::labeled("SSH/HTTP"))?;

    Ok(builder.finish())
}

/// VPC architecture with a nested public subnet cluster, labeled directed
/// edges, and orthogonal edge routing hints.
pub fn aws_vpc_cluster() -> Result<Diagram, ModelError> {
    let mut builder = DiagramBuilder::new("AWS VPC Architecture");
    builder
        .graph_attr("splines", "ortho")
        .graph_attr("nodesep", "0.5")
        .graph_attr("ranksep", "0.75");

    let user = builder.node(NodeKind::UserActor, "User")?;

    builder.cluster("VPC", |b| {
        b.node(NodeKind::Vpc, "main-vpc")?;

        let igw = b.node(NodeKind::InternetGateway, "main-gateway")?;
        b.edge_with(
            user,
            igw,
            EdgeStyle::labeled("Internet connection").direction(Direction::Forward),
        )?;

        b.cluster("Public Subnet", |b| {
            let subnet = b.node(NodeKind::Subnet, "main-public-subnet")?;

            let route_table = b.node(NodeKind::RouteTable, "main-public-rt")?;
            b.edge_with(
                subnet,
                route_table,
                EdgeStyle::labeled("Route Table Association").direction(Direction::Forward),
            )?;
            b.edge_with(
                igw,
                route_table,
                EdgeStyle::labeled("Default Route").direction(Direction::Forward),
            )?;

            let nacl = b.node(NodeKind::NetworkAcl, "main-acl")?;
            b.edge_with(
                subnet,
                nacl,
                EdgeStyle::labeled("Network ACL Association").direction(Direction::Forward),
            )?;

            let ec2 = b.node(NodeKind::ComputeInstance, "WebServerInstance")?;
            b.edge_with(ec2, subnet, EdgeStyle::labeled("Subnet"))
        })
    })?;

    Ok(builder.finish())
}

/// The built-in topology presets, named for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Flat overview ([`aws_architecture`])
    AwsArchitecture,
    /// Clustered VPC ([`aws_cluster`])
    AwsCluster,
    /// Nested public subnet with routing hints ([`aws_vpc_cluster`])
    AwsVpcCluster,
}

impl Preset {
    /// All presets, in documentation order.
    pub fn all() -> [Preset; 3] {
        [
            Preset::AwsArchitecture,
            Preset::AwsCluster,
            Preset::AwsVpcCluster,
        ]
    }

    /// Build the preset's diagram model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if the declarations violate a model invariant;
    /// for the built-in presets this indicates a programming error.
    pub fn build(self) -> Result<Diagram, ModelError> {
        match self {
            Preset::AwsArchitecture => aws_architecture(),
            Preset::AwsCluster => aws_cluster(),
            Preset::AwsVpcCluster => aws_vpc_cluster(),
        }
    }
}

impl FromStr for Preset {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aws-architecture" => Ok(Self::AwsArchitecture),
            "aws-cluster" => Ok(Self::AwsCluster),
            "aws-vpc-cluster" => Ok(Self::AwsVpcCluster),
            _ => Err("Unknown preset"),
        }
    }
}

impl From<Preset> for &'static str {
    fn from(val: Preset) -> Self {
        match val {
            Preset::AwsArchitecture => "aws-architecture",
            Preset::AwsCluster => "aws-cluster",
            Preset::AwsVpcCluster => "aws-vpc-cluster",
        }
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
